use nalgebra::Vector3;
use paperwing::{
    components::WingGrid,
    physics::{ReferenceBody, RigidBody},
    resources::SimulationConfig,
    simulation::{FlightSimulation, HeadlessRunner},
    utils::{ConfigError, SimError},
};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

use crate::common::{create_test_config, TestAppBuilder};

fn runner_for(config: SimulationConfig) -> Result<HeadlessRunner<ReferenceBody, WingGrid>, SimError> {
    HeadlessRunner::builder()
        .with_engine(ReferenceBody::from_config(&config.physics))
        .with_surface(config.wing_grid.clone())
        .with_config(config)
        .build()
}

#[test]
fn test_saved_config_drives_the_plugin() {
    let mut config = create_test_config();
    config.physics.spawn_position = Vector3::new(0.0, 3.0, 0.0);
    config.launch.default_force = 10.0;

    let file = NamedTempFile::new().unwrap();
    config.save(file.path()).unwrap();
    let loaded = SimulationConfig::load(file.path()).unwrap();
    assert_eq!(loaded, config);

    let mut app = TestAppBuilder::new().with_config(loaded).build();
    app.run_steps(1);

    let body = app.query_single::<ReferenceBody>().unwrap().snapshot();
    assert_eq!(body.position, Vector3::new(0.0, 3.0, 0.0));
    assert_eq!(
        app.query_single::<FlightSimulation>()
            .unwrap()
            .launch_controls()
            .force(),
        10.0
    );
}

#[test]
fn test_partial_yaml_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "wing_grid:\n  width: 3\n  height: 2\n  cell_size: 0.25\nwind:\n  velocity: [2.0, 0.0, 0.0]"
    )
    .unwrap();

    let config = SimulationConfig::load(file.path()).unwrap();
    assert_eq!(config.wing_grid, WingGrid::new(3, 2, 0.25));
    assert_eq!(config.physics, SimulationConfig::default().physics);

    let mut runner = runner_for(config).unwrap();
    runner.launch().unwrap();
    runner.step().unwrap();

    // Drag from the cross wind pushes the plane downwind
    assert!(runner.engine().snapshot().velocity.x > 0.0);
}

#[test]
fn test_invalid_file_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "physics:\n  timestep: -0.02").unwrap();

    assert!(matches!(
        SimulationConfig::load(file.path()),
        Err(ConfigError::ValidationError(_))
    ));
}

#[test]
fn test_malformed_yaml_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "physics: [not, a, map").unwrap();

    assert!(matches!(
        SimulationConfig::load(file.path()),
        Err(ConfigError::YamlError(_))
    ));
}

#[test]
fn test_runner_rejects_invalid_config() {
    let mut config = create_test_config();
    config.settle_duration = -1.0;

    assert!(matches!(
        runner_for(config),
        Err(SimError::Config(ConfigError::ValidationError(_)))
    ));
}

#[test]
fn test_wind_from_config_reaches_the_flight() {
    let mut config = create_test_config();
    config.wind.velocity = Vector3::new(0.0, 0.0, -5.0);
    let mut runner = runner_for(config).unwrap();

    assert_eq!(
        runner.simulation().wind_velocity(),
        Vector3::new(0.0, 0.0, -5.0)
    );

    let mut calm = runner_for(create_test_config()).unwrap();
    runner.launch().unwrap();
    calm.launch().unwrap();

    // A head wind raises the airspeed and with it the drag
    let windy_drag = runner.step().unwrap().forces.drag.norm();
    let calm_drag = calm.step().unwrap().forces.drag.norm();
    assert!(windy_drag > calm_drag);
}
