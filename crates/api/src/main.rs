use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::app::build_router;
use api::config::{AppConfig, StoreBackend};
use api::gql::build_schema;
use api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;

    // The listener is bound only once the store is ready.
    let state = match (config.backend, &config.database) {
        (StoreBackend::Postgres, Some(db_config)) => {
            let pool = infra::db::connect(&db_config.url, db_config.max_connections).await?;
            tracing::info!(
                "Connected to Postgres with max {} connections",
                db_config.max_connections
            );

            if db_config.skip_migrations {
                tracing::info!("Skipping database migrations (SKIP_MIGRATIONS=true)");
            } else {
                tracing::info!("Running database migrations...");
                infra::db::migrate(&pool).await?;
                tracing::info!("Database migrations completed successfully");
            }

            AppState::postgres(pool, &config.auth)
        }
        _ => {
            tracing::info!("Using in-memory fixture store");
            AppState::in_memory(&config.auth)
        }
    };

    let schema = build_schema(state.clone(), config.introspection);
    let app = build_router(state, schema, &config);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server started at http://{}/graphql", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
