pub mod reference;
pub mod traits;

pub use reference::ReferenceBody;
pub use traits::{BodyCommand, PhysicsEngine, RigidBody, StepReport};
