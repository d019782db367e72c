//! Persistence for the movie catalog: entity rows, the `Repository`
//! capability trait, and its in-memory and PostgreSQL implementations.

pub mod db;
pub mod fixtures;
pub mod memory;
pub mod models;
pub mod repos;
pub mod store;

pub use memory::MemoryRepo;
pub use models::{ActorRow, MovieRow, MovieStatus, NewActor, NewMovie};
pub use store::{Entity, Repository, StoreError, StoreResult};
