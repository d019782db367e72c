pub mod actors;
pub mod movies;

pub use actors::ActorRepo;
pub use movies::MovieRepo;
