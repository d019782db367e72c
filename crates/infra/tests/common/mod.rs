use std::env;

use infra::db::{connect, migrate, Db};

/// Connect to `TEST_DATABASE_URL` and apply migrations.
///
/// Returns `None` when the variable is unset so the suite still runs on
/// machines without PostgreSQL.
pub async fn setup_test_db() -> Option<Db> {
    let Ok(database_url) = env::var("TEST_DATABASE_URL") else {
        eprintln!("TEST_DATABASE_URL not set, skipping PostgreSQL test");
        return None;
    };

    let db = connect(&database_url, 5)
        .await
        .expect("Failed to connect to test database");
    migrate(&db).await.expect("Failed to run migrations");

    Some(db)
}
