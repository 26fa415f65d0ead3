use bevy::prelude::*;
use paperwing::{
    components::{FlightEvent, LaunchParameters, LaunchRequest, ResetRequest},
    plugins::PaperPlanePlugin,
    resources::SimulationConfig,
};

use super::create_test_config;

/// Builder for a headless app running the paper plane plugin
pub struct TestAppBuilder {
    config: SimulationConfig,
    spawn_plane: bool,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: create_test_config(),
            spawn_plane: true,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn without_plane(mut self) -> Self {
        self.spawn_plane = false;
        self
    }

    /// Build the app without running startup.
    pub fn build_unstarted(self) -> App {
        let mut app = App::new();
        let plugin = PaperPlanePlugin::new(self.config);
        if self.spawn_plane {
            app.add_plugins(plugin);
        } else {
            app.add_plugins(plugin.without_plane());
        }
        app
    }

    pub fn build(self) -> TestApp {
        let mut app = self.build_unstarted();

        // Run startup once to spawn the plane
        app.update();

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Run `steps` fixed flight steps.
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    /// Run fixed steps until `done` holds, up to `max_steps`. Returns the
    /// number of steps taken.
    pub fn run_until(&mut self, max_steps: usize, mut done: impl FnMut(&mut Self) -> bool) -> usize {
        for step in 0..max_steps {
            if done(self) {
                return step;
            }
            self.run_steps(1);
        }
        max_steps
    }

    pub fn launch(&mut self, params: Option<LaunchParameters>) {
        self.app.world_mut().send_event(LaunchRequest {
            entity: None,
            params,
        });
    }

    pub fn reset(&mut self) {
        self.app
            .world_mut()
            .send_event(ResetRequest { entity: None });
    }

    /// Every flight event sent so far.
    pub fn flight_events(&self) -> Vec<FlightEvent> {
        let events = self.app.world().resource::<Events<FlightEvent>>();
        events.get_cursor().read(events).copied().collect()
    }

    pub fn count_events(&self, matches: impl Fn(&FlightEvent) -> bool) -> usize {
        self.flight_events().iter().filter(|event| matches(event)).count()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }

    pub fn get_resource<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }
}
