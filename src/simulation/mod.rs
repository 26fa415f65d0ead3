mod driver;
mod runner;

pub use driver::{FlightSimulation, TickOutput, Transition};
pub use runner::{HeadlessRunner, HeadlessRunnerBuilder, StepOutcome};
