pub mod resolvers;
pub mod types;

pub use resolvers::{ActorMutation, ActorQuery};
pub use types::{Actor, ActorInput};
