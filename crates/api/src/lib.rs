pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod events;
pub mod gql;
pub mod middleware;
pub mod state;

pub use state::AppState;
