use std::env;
use std::sync::Arc;

use api::auth::{AuthConfig, RequestContext};
use api::config::{AppConfig, StoreBackend};
use api::gql::{build_schema, CatalogSchema};
use api::AppState;
use async_graphql::{Request, Variables};
use async_trait::async_trait;
use infra::db::{connect, migrate};
use infra::{Entity, Repository, StoreError, StoreResult};

pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "test-secret".to_string(),
        access_token_expiration_minutes: 5,
    }
}

/// State over the seeded in-memory fixtures.
#[allow(dead_code)]
pub fn setup_state() -> AppState {
    AppState::in_memory(&test_auth_config())
}

#[allow(dead_code)]
pub fn setup_schema() -> (AppState, CatalogSchema) {
    let state = setup_state();
    let schema = build_schema(state.clone(), true);
    (state, schema)
}

#[allow(dead_code)]
pub fn test_app_config() -> AppConfig {
    AppConfig {
        port: 0,
        backend: StoreBackend::Memory,
        database: None,
        auth: test_auth_config(),
        introspection: true,
        playground: false,
        allowed_origins: vec!["http://localhost:3000".to_string()],
    }
}

/// Schema over PostgreSQL at `TEST_DATABASE_URL`, or `None` when it is unset.
#[allow(dead_code)]
pub async fn setup_postgres_schema() -> Option<(AppState, CatalogSchema)> {
    let Ok(database_url) = env::var("TEST_DATABASE_URL") else {
        eprintln!("TEST_DATABASE_URL not set, skipping PostgreSQL test");
        return None;
    };

    let db = connect(&database_url, 5)
        .await
        .expect("Failed to connect to test database");
    migrate(&db).await.expect("Failed to run migrations");

    let state = AppState::postgres(db, &test_auth_config());
    let schema = build_schema(state.clone(), true);
    Some((state, schema))
}

/// Store whose every call fails, as if the database were unreachable.
pub struct UnreachableStore;

#[async_trait]
impl<T: Entity> Repository<T> for UnreachableStore {
    async fn find_all(&self) -> StoreResult<Vec<T>> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn find_by_id(&self, _id: &str) -> StoreResult<Option<T>> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn create(&self, _draft: T::Draft) -> StoreResult<T> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

#[allow(dead_code)]
pub fn unreachable_schema() -> CatalogSchema {
    let state = AppState::new(
        Arc::new(UnreachableStore),
        Arc::new(UnreachableStore),
        &test_auth_config(),
    );
    build_schema(state, true)
}

/// Helper function to execute GraphQL queries and mutations
#[allow(dead_code)]
pub async fn execute_graphql(
    schema: &CatalogSchema,
    query: &str,
    variables: Option<Variables>,
    user_id: Option<&str>,
) -> async_graphql::Response {
    let mut request = Request::new(query);

    if let Some(vars) = variables {
        request = request.variables(vars);
    }

    if let Some(user_id) = user_id {
        request = request.data(RequestContext::for_user(user_id));
    }

    schema.execute(request).await
}

#[allow(dead_code)]
/// Execute and return the `data` payload, failing the test on any GraphQL error.
pub async fn query_json(
    schema: &CatalogSchema,
    query: &str,
    variables: Option<Variables>,
    user_id: Option<&str>,
) -> serde_json::Value {
    let response = execute_graphql(schema, query, variables, user_id).await;
    assert!(
        response.errors.is_empty(),
        "GraphQL errors: {:?}",
        response.errors
    );
    response.data.into_json().unwrap()
}
