use approx::assert_relative_eq;
use bevy::prelude::*;
use paperwing::{
    components::{PlaneScale, WingGrid, WingLoad},
    physics::{ReferenceBody, RigidBody},
    resources::{SimulationClock, SimulationConfig},
    simulation::FlightSimulation,
};

use crate::common::{create_test_config, TestAppBuilder};

#[test]
fn test_plane_spawned_with_collaborators() {
    let mut app = TestAppBuilder::new().build();

    assert!(app.app.should_exit().is_none());
    assert!(app.query_single::<FlightSimulation>().is_some());
    assert!(app.query_single::<ReferenceBody>().is_some());
    assert!(app.query_single::<WingLoad>().is_some());
    assert_eq!(
        app.query_single::<WingGrid>().cloned(),
        Some(create_test_config().wing_grid)
    );
}

#[test]
fn test_missing_rigid_body_exits_with_error() {
    let mut app = TestAppBuilder::new().without_plane().build_unstarted();
    app.add_systems(Startup, |mut commands: Commands| {
        commands.spawn((
            FlightSimulation::new(SimulationConfig::default()),
            WingGrid::default(),
        ));
    });

    app.update();

    assert!(matches!(app.should_exit(), Some(AppExit::Error(_))));
}

#[test]
fn test_missing_wing_grid_exits_with_error() {
    let mut app = TestAppBuilder::new().without_plane().build_unstarted();
    app.add_systems(Startup, |mut commands: Commands| {
        let config = SimulationConfig::default();
        commands.spawn((
            ReferenceBody::from_config(&config.physics),
            FlightSimulation::new(config),
        ));
    });

    app.update();

    assert!(matches!(app.should_exit(), Some(AppExit::Error(_))));
}

#[test]
fn test_clock_follows_fixed_steps() {
    let mut app = TestAppBuilder::new().build();
    app.run_steps(50);

    let clock = app.get_resource::<SimulationClock>().unwrap();
    assert_eq!(clock.step_count(), 50);
    assert_relative_eq!(clock.elapsed_seconds(), 1.0, epsilon = 1e-9);
}

#[test]
fn test_wing_load_from_pressure_field() {
    let mut app = TestAppBuilder::new().build();
    app.run_steps(1);

    let load = *app.query_single::<WingLoad>().unwrap();
    // Flat grid: every normal faces -Z, so only z carries pressure
    assert_relative_eq!(load.pressure_acceleration.x, 0.0);
    assert_relative_eq!(load.pressure_acceleration.y, -1.0);
    assert!(load.pressure_acceleration.z < -100_000.0);
    // A plane at rest only sags
    assert_relative_eq!(load.flex.external_acceleration.y, -0.2);
}

#[test]
fn test_scale_change_recomputes_coefficients() {
    let mut app = TestAppBuilder::new().build();
    let world = app.app.world_mut();
    let entity = world
        .query_filtered::<Entity, With<FlightSimulation>>()
        .single(world);
    world.entity_mut(entity).insert(PlaneScale::new(2.0, 1.0, 1.0));

    app.run_steps(1);

    let constants = *app.query_single::<FlightSimulation>().unwrap().constants();
    assert_relative_eq!(constants.wing_area, 0.4);
    assert_relative_eq!(constants.lift_coefficient, 0.9);
    assert_relative_eq!(constants.drag_coefficient, 0.6);
}

#[test]
fn test_transform_follows_body() {
    let mut app = TestAppBuilder::new().build();
    app.launch(None);
    app.run_steps(10);

    let body = app.query_single::<ReferenceBody>().unwrap().snapshot();
    let transform = *app.query_single::<Transform>().unwrap();

    assert_relative_eq!(transform.translation.x, body.position.x as f32, epsilon = 1e-5);
    assert_relative_eq!(transform.translation.y, body.position.y as f32, epsilon = 1e-5);
    assert_relative_eq!(transform.translation.z, body.position.z as f32, epsilon = 1e-5);
    assert!(transform.translation.z > 0.0);
}
