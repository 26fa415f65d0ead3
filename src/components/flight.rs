use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::utils::{deg_to_rad, pitch_rotation, FlightError, DEFAULT_SETTLE_DURATION};

/// Phase of a single flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightState {
    #[default]
    Idle,
    Launched,
    Landed,
}

/// Launch force and pitch selected before a flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchParameters {
    /// Impulse magnitude (N·s).
    pub force: f64,
    /// Pitch angle in degrees; positive values pitch the nose down.
    pub angle: f64,
}

impl LaunchParameters {
    pub fn new(force: f64, angle: f64) -> Self {
        Self { force, angle }
    }

    /// Launch impulse `(0, -0.5·F·sin θ, F·cos θ)`.
    pub fn impulse(&self) -> Vector3<f64> {
        let angle = deg_to_rad(self.angle);
        Vector3::new(
            0.0,
            -0.5 * self.force * angle.sin(),
            self.force * angle.cos(),
        )
    }

    /// Body attitude at the moment of launch.
    pub fn orientation(&self) -> UnitQuaternion<f64> {
        pitch_rotation(deg_to_rad(self.angle))
    }
}

/// Notifications produced by flight transitions.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum FlightEvent {
    Launched {
        entity: Option<Entity>,
        params: LaunchParameters,
    },
    Landed {
        entity: Option<Entity>,
        flight_time: f64,
    },
    Settled {
        entity: Option<Entity>,
    },
    Reset {
        entity: Option<Entity>,
    },
}

impl FlightEvent {
    /// Same event, attributed to `entity`.
    pub fn with_entity(self, entity: Entity) -> Self {
        let entity = Some(entity);
        match self {
            Self::Launched { params, .. } => Self::Launched { entity, params },
            Self::Landed { flight_time, .. } => Self::Landed {
                entity,
                flight_time,
            },
            Self::Settled { .. } => Self::Settled { entity },
            Self::Reset { .. } => Self::Reset { entity },
        }
    }
}

/// Ask a plane to launch. `None` fields mean every plane and the launch
/// panel's current force and angle.
#[derive(Event, Debug, Clone, Copy, Default, PartialEq)]
pub struct LaunchRequest {
    pub entity: Option<Entity>,
    pub params: Option<LaunchParameters>,
}

#[derive(Event, Debug, Clone, Copy, Default, PartialEq)]
pub struct ResetRequest {
    pub entity: Option<Entity>,
}

/// What `FlightStateMachine::advance` observed during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerUpdate {
    Running,
    Expired,
    Idle,
}

/// Idle → Launched → Landed, plus the post-landing settle timer.
///
/// The machine only records transitions and time; applying impulses and
/// forces is left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightStateMachine {
    state: FlightState,
    /// Grace period after landing before the flight counts as settled (s).
    settle_duration: f64,
    settle_timer: f64,
    settle_timer_running: bool,
    settled: bool,
    /// Accumulated simulated time since construction (s).
    elapsed: f64,
    launch_time: Option<f64>,
    landing_time: Option<f64>,
}

impl Default for FlightStateMachine {
    fn default() -> Self {
        Self::new(DEFAULT_SETTLE_DURATION)
    }
}

impl FlightStateMachine {
    pub fn new(settle_duration: f64) -> Self {
        Self {
            state: FlightState::Idle,
            settle_duration,
            settle_timer: 0.0,
            settle_timer_running: false,
            settled: false,
            elapsed: 0.0,
            launch_time: None,
            landing_time: None,
        }
    }

    pub fn state(&self) -> FlightState {
        self.state
    }

    pub fn settle_duration(&self) -> f64 {
        self.settle_duration
    }

    pub fn settle_timer(&self) -> f64 {
        self.settle_timer
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    pub fn launch_time(&self) -> Option<f64> {
        self.launch_time
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Aerodynamic forces and orientation control run only while airborne.
    pub fn is_airborne(&self) -> bool {
        self.state == FlightState::Launched && !self.settle_timer_running
    }

    /// Seconds between launch and landing, or since launch while airborne.
    pub fn flight_time(&self) -> Option<f64> {
        let launch = self.launch_time?;
        Some(self.landing_time.unwrap_or(self.elapsed) - launch)
    }

    /// Idle → Launched. Returns the impulse to apply.
    pub fn launch(&mut self, params: &LaunchParameters) -> Result<Vector3<f64>, FlightError> {
        match self.state {
            FlightState::Launched => Err(FlightError::AlreadyLaunched),
            FlightState::Landed => Err(FlightError::FlightEnded),
            FlightState::Idle => {
                self.state = FlightState::Launched;
                self.launch_time = Some(self.elapsed);
                self.landing_time = None;
                Ok(params.impulse())
            }
        }
    }

    /// Launched → Landed, starting the settle timer.
    pub fn land(&mut self) -> Result<(), FlightError> {
        if self.state != FlightState::Launched {
            return Err(FlightError::NotInFlight);
        }
        self.state = FlightState::Landed;
        self.landing_time = Some(self.elapsed);
        self.settle_timer = 0.0;
        self.settle_timer_running = true;
        self.settled = false;
        Ok(())
    }

    /// Launched/Landed → Idle.
    pub fn reset(&mut self) -> Result<(), FlightError> {
        if self.state == FlightState::Idle {
            return Err(FlightError::NotLaunched);
        }
        self.state = FlightState::Idle;
        self.settle_timer = 0.0;
        self.settle_timer_running = false;
        self.settled = false;
        self.launch_time = None;
        self.landing_time = None;
        Ok(())
    }

    /// Accumulate simulated time. Reports `Expired` exactly once, on the
    /// tick the settle timer passes the settle duration.
    pub fn advance(&mut self, dt: f64) -> TimerUpdate {
        self.elapsed += dt;

        if !self.settle_timer_running {
            return TimerUpdate::Idle;
        }

        self.settle_timer += dt;
        if self.settle_timer > self.settle_duration {
            self.settle_timer_running = false;
            self.settled = true;
            return TimerUpdate::Expired;
        }
        TimerUpdate::Running
    }
}
