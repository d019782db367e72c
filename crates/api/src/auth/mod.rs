pub mod config;
pub mod context;
pub mod jwt;

pub use config::AuthConfig;
pub use context::{request_context, RequestContext};
pub use jwt::{Claims, JwtService};
