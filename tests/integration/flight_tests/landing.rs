use nalgebra::Vector3;
use paperwing::{
    components::{FlightEvent, FlightState, Telemetry},
    physics::{ReferenceBody, RigidBody},
    simulation::FlightSimulation,
};
use pretty_assertions::assert_eq;

use crate::common::{assert_spatial_valid, create_grounded_config, TestApp, TestAppBuilder};

fn is_landed(event: &FlightEvent) -> bool {
    matches!(event, FlightEvent::Landed { .. })
}

fn is_settled(event: &FlightEvent) -> bool {
    matches!(event, FlightEvent::Settled { .. })
}

fn fly_until_settled(app: &mut TestApp) -> usize {
    let settled_before = app.count_events(is_settled);
    app.launch(None);
    app.run_until(5_000, |app| app.count_events(is_settled) > settled_before)
}

#[test]
fn test_flight_lands_and_settles_once() {
    let mut app = TestAppBuilder::new().build();
    let steps = fly_until_settled(&mut app);
    assert!(steps < 5_000, "plane never settled");

    app.run_steps(100);

    assert_eq!(app.count_events(is_landed), 1);
    assert_eq!(app.count_events(is_settled), 1);

    let simulation = app.query_single::<FlightSimulation>().unwrap();
    assert_eq!(simulation.state(), FlightState::Landed);
    assert!(simulation.machine().is_settled());

    let body = app.query_single::<ReferenceBody>().unwrap().snapshot();
    assert_spatial_valid(&body);
    assert_eq!(body.position.y, 0.0);
    assert!(body.position.z > 0.0, "plane should have flown forwards");
}

#[test]
fn test_landed_event_reports_flight_time() {
    let mut app = TestAppBuilder::new().build();
    fly_until_settled(&mut app);

    let flight_time = app
        .flight_events()
        .iter()
        .find_map(|event| match event {
            FlightEvent::Landed { flight_time, .. } => Some(*flight_time),
            _ => None,
        })
        .expect("no landing event");
    assert!(flight_time > 0.0);
}

#[test]
fn test_telemetry_freezes_after_landing() {
    let mut app = TestAppBuilder::new().build();
    fly_until_settled(&mut app);

    let before = *app.query_single::<Telemetry>().unwrap();
    app.run_steps(50);
    let after = *app.query_single::<Telemetry>().unwrap();

    assert_eq!(before, after);
    assert!(before.speed > 0.0);
}

#[test]
fn test_ground_contact_before_launch_is_ignored() {
    let mut app = TestAppBuilder::new()
        .with_config(create_grounded_config())
        .build();

    app.run_steps(20);

    assert_eq!(app.count_events(is_landed), 0);
    assert_eq!(
        app.query_single::<FlightSimulation>().unwrap().state(),
        FlightState::Idle
    );
}

#[test]
fn test_reset_and_relaunch() {
    let mut app = TestAppBuilder::new().build();
    fly_until_settled(&mut app);

    app.reset();
    app.run_steps(1);

    assert_eq!(
        app.count_events(|event| matches!(event, FlightEvent::Reset { .. })),
        1
    );
    assert_eq!(
        app.query_single::<FlightSimulation>().unwrap().state(),
        FlightState::Idle
    );
    assert_eq!(*app.query_single::<Telemetry>().unwrap(), Telemetry::default());

    let body = app.query_single::<ReferenceBody>().unwrap().snapshot();
    assert_eq!(body.position, Vector3::new(0.0, 1.0, 0.0));
    assert_eq!(body.velocity, Vector3::zeros());

    fly_until_settled(&mut app);
    assert_eq!(
        app.count_events(|event| matches!(event, FlightEvent::Launched { .. })),
        2
    );
    assert_eq!(app.count_events(is_landed), 2);
}

#[test]
fn test_reset_before_launch_is_rejected() {
    let mut app = TestAppBuilder::new().build();
    app.reset();
    app.run_steps(1);

    assert_eq!(
        app.count_events(|event| matches!(event, FlightEvent::Reset { .. })),
        0
    );
}
