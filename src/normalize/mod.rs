mod builder;
mod model;

pub use builder::{Normalized, NormalizedModelBuilder};
pub use model::{Domain, Entity, NormalizedProject, State, StateId, StateMachine, Subdomain, Transition};
