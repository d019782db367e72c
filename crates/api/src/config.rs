use std::env;

use anyhow::{bail, Context, Result};

use crate::auth::AuthConfig;

const DEFAULT_PORT: u16 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    /// Seeded in-memory fixture collections.
    Memory,
    /// PostgreSQL via `DATABASE_URL`.
    Postgres,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub skip_migrations: bool,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub backend: StoreBackend,
    pub database: Option<DatabaseConfig>,
    pub auth: AuthConfig,
    pub introspection: bool,
    pub playground: bool,
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got {raw:?}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let database_url = env::var("DATABASE_URL").ok();
        let backend = match env::var("STORE_BACKEND").ok().as_deref() {
            Some("memory") => StoreBackend::Memory,
            Some("postgres") => StoreBackend::Postgres,
            Some(other) => bail!("STORE_BACKEND must be `memory` or `postgres`, got {other:?}"),
            None if database_url.is_some() => StoreBackend::Postgres,
            None => StoreBackend::Memory,
        };

        let database = match (backend, database_url) {
            (StoreBackend::Postgres, Some(url)) => Some(DatabaseConfig {
                url,
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
                skip_migrations: flag("SKIP_MIGRATIONS", false),
            }),
            (StoreBackend::Postgres, None) => {
                bail!("DATABASE_URL must be set when STORE_BACKEND=postgres")
            }
            (StoreBackend::Memory, _) => None,
        };

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();

        Ok(Self {
            port,
            backend,
            database,
            auth: AuthConfig::from_env(),
            introspection: flag("GQL_INTROSPECTION", true),
            playground: flag("GQL_PLAYGROUND", true),
            allowed_origins,
        })
    }
}

fn flag(name: &str, default: bool) -> bool {
    env::var(name)
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(default)
}
