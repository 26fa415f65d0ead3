use bevy::{log::LogPlugin, prelude::*};
use clap::Parser;
use std::{path::PathBuf, process::ExitCode};

use paperwing::{
    components::{FlightEvent, LaunchControls, LaunchRequest, Telemetry},
    PaperPlanePlugin, SimulationConfig,
};

/// Steps between telemetry log lines.
const LOG_INTERVAL: u64 = 25;

#[derive(Parser, Debug)]
#[command(
    name = "paperwing_launch",
    version,
    about = "Launch a paper plane headlessly and fly it until it settles"
)]
struct LaunchArgs {
    /// Simulation config (YAML); defaults are used when omitted
    config: Option<PathBuf>,

    /// Launch force (N·s), overriding the config's slider default
    #[arg(long)]
    force: Option<f64>,

    /// Nose-up launch angle (degrees)
    #[arg(long)]
    angle: Option<f64>,

    /// Give up after this many fixed steps
    #[arg(long, default_value_t = 10_000)]
    max_steps: u64,
}

fn current_telemetry(app: &mut App) -> Option<Telemetry> {
    let world = app.world_mut();
    let mut query = world.query::<&Telemetry>();
    query.iter(world).next().copied()
}

fn main() -> ExitCode {
    let args = LaunchArgs::parse();

    let config = match &args.config {
        Some(path) => match SimulationConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => SimulationConfig::default(),
    };

    let mut controls = LaunchControls::new(&config.launch);
    if let Some(force) = args.force {
        controls.set_force(force);
    }
    if let Some(angle) = args.angle {
        controls.set_angle(angle);
    }

    let mut app = App::new();
    app.add_plugins((LogPlugin::default(), PaperPlanePlugin::new(config)));
    app.finish();
    app.cleanup();

    // Startup: spawn the plane and check it is complete
    app.update();
    if let Some(AppExit::Error(code)) = app.should_exit() {
        return ExitCode::from(code.get());
    }

    app.world_mut().send_event(LaunchRequest {
        entity: None,
        params: Some(controls.launch_parameters()),
    });

    let mut cursor = app.world().resource::<Events<FlightEvent>>().get_cursor();
    let mut settled = false;

    for step in 0..args.max_steps {
        app.world_mut().run_schedule(FixedUpdate);

        let events = app.world().resource::<Events<FlightEvent>>();
        for event in cursor.read(events) {
            if let FlightEvent::Settled { .. } = event {
                settled = true;
            }
        }

        if step % LOG_INTERVAL == 0 {
            if let Some(telemetry) = current_telemetry(&mut app) {
                info!("step {:>5}: {}", step, telemetry);
            }
        }
        if settled {
            break;
        }
    }

    match current_telemetry(&mut app) {
        Some(telemetry) if settled => info!("Flight settled: {}", telemetry),
        Some(telemetry) => warn!("Flight did not settle: {}", telemetry),
        None => error!("No paper plane in the world"),
    }

    ExitCode::SUCCESS
}
