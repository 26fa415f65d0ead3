use nalgebra::{UnitQuaternion, Vector3};
use paperwing::{
    components::{FlightEvent, FlightState, GridCell, SpatialComponent, SurfaceGenerator, WingGrid},
    physics::{PhysicsEngine, ReferenceBody, RigidBody, StepReport},
    simulation::HeadlessRunner,
    utils::SimError,
};

use crate::common::{assert_spatial_valid, create_test_config};

/// Reference body that records the order in which it is driven.
struct RecordingEngine {
    inner: ReferenceBody,
    calls: Vec<&'static str>,
}

impl RecordingEngine {
    fn new() -> Self {
        Self {
            inner: ReferenceBody::from_config(&create_test_config().physics),
            calls: Vec::new(),
        }
    }
}

impl RigidBody for RecordingEngine {
    fn snapshot(&self) -> SpatialComponent {
        self.inner.snapshot()
    }

    fn apply_force(&mut self, force: Vector3<f64>) {
        self.calls.push("force");
        self.inner.apply_force(force);
    }

    fn apply_impulse(&mut self, impulse: Vector3<f64>) {
        self.calls.push("impulse");
        self.inner.apply_impulse(impulse);
    }

    fn apply_torque(&mut self, torque: Vector3<f64>) {
        self.calls.push("torque");
        self.inner.apply_torque(torque);
    }

    fn set_orientation(&mut self, orientation: UnitQuaternion<f64>) {
        self.calls.push("orientation");
        self.inner.set_orientation(orientation);
    }

    fn set_gravity_enabled(&mut self, enabled: bool) {
        self.calls.push("gravity");
        self.inner.set_gravity_enabled(enabled);
    }

    fn reset_motion(&mut self, position: Vector3<f64>, orientation: UnitQuaternion<f64>) {
        self.calls.push("reset");
        self.inner.reset_motion(position, orientation);
    }
}

impl PhysicsEngine for RecordingEngine {
    fn step(&mut self, dt: f64) -> StepReport {
        self.calls.push("step");
        self.inner.step(dt)
    }
}

/// A wing with no cells.
struct EmptySurface;

impl SurfaceGenerator for EmptySurface {
    fn cells(&self) -> Vec<GridCell> {
        Vec::new()
    }
}

#[test]
fn test_commands_reach_engine_before_integration() {
    let mut runner = HeadlessRunner::<RecordingEngine, WingGrid>::builder()
        .with_config(create_test_config())
        .with_engine(RecordingEngine::new())
        .with_surface(create_test_config().wing_grid)
        .build()
        .unwrap();

    runner.launch().unwrap();
    assert_eq!(runner.engine().calls, vec!["orientation", "gravity", "impulse"]);

    runner.step().unwrap();
    assert_eq!(
        runner.engine().calls[3..],
        ["force", "force", "orientation", "step"]
    );
}

#[test]
fn test_empty_surface_is_an_error() {
    let config = create_test_config();
    let mut runner = HeadlessRunner::<ReferenceBody, EmptySurface>::builder()
        .with_engine(ReferenceBody::from_config(&config.physics))
        .with_surface(EmptySurface)
        .with_config(config)
        .build()
        .unwrap();

    assert!(matches!(runner.step(), Err(SimError::EmptyGrid)));
}

#[test]
fn test_missing_collaborators() {
    let result = HeadlessRunner::<ReferenceBody, WingGrid>::builder()
        .with_config(create_test_config())
        .build();
    assert!(matches!(result, Err(SimError::MissingCollaborator(_))));
}

#[test]
fn test_headless_flight_matches_plugin_semantics() {
    let config = create_test_config();
    let mut runner = HeadlessRunner::<ReferenceBody, WingGrid>::builder()
        .with_engine(ReferenceBody::from_config(&config.physics))
        .with_surface(config.wing_grid.clone())
        .with_config(config)
        .build()
        .unwrap();

    runner.launch().unwrap();
    let events = runner.run_until_settled(5_000).unwrap();

    assert!(matches!(events.last(), Some(FlightEvent::Settled { entity: None })));
    assert_eq!(
        events
            .iter()
            .filter(|event| matches!(event, FlightEvent::Landed { .. }))
            .count(),
        1
    );
    assert_eq!(runner.simulation().state(), FlightState::Landed);
    assert_spatial_valid(&runner.engine().snapshot());
}
