use std::time::Duration;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLProtocol, GraphQLWebSocket};
use axum::{
    extract::{Request, State, WebSocketUpgrade},
    http::{
        header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE},
        Method, StatusCode,
    },
    middleware,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::auth::{Claims, JwtService, RequestContext};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::gql::CatalogSchema;
use crate::middleware::jwt::jwt_middleware;
use crate::state::AppState;

/// Build the Axum router with health endpoint, GraphQL and the optional playground.
pub fn build_router(state: AppState, schema: CatalogSchema, config: &AppConfig) -> Router {
    let mut router = Router::new()
        // Simple liveness check; also proves DB connectivity when store-backed.
        .route("/health", get(health))
        // POST for queries/mutations, GET upgrades to a subscription socket
        .route(
            "/graphql",
            get({
                let schema = schema.clone();
                move |state, protocol, upgrade| graphql_ws_handler(state, protocol, upgrade, schema)
            })
            .post({
                let schema = schema.clone();
                move |req| graphql_handler(req, schema)
            }),
        );

    if config.playground {
        router = router.route("/", get(graphiql));
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    router
        .with_state(state.clone())
        .layer(middleware::from_fn_with_state(state, jwt_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([CONTENT_TYPE, AUTHORIZATION]),
        )
}

/// Executes a GraphQL request with a `RequestContext` built from the JWT
/// claims the middleware left in the request extensions.
async fn graphql_handler(req: Request, schema: CatalogSchema) -> Result<Response, AppError> {
    let claims = req.extensions().get::<Claims>().cloned();

    let (_parts, body) = req.into_parts();
    let body_bytes = axum::body::to_bytes(body, 2 * 1024 * 1024)
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read request body: {}", e)))?;

    let gql_request: async_graphql::Request = serde_json::from_slice(&body_bytes)
        .map_err(|e| AppError::BadRequest(format!("Invalid GraphQL request: {}", e)))?;

    let gql_request = gql_request.data(RequestContext::from(claims));
    let gql_response = schema.execute(gql_request).await;

    Ok(Json(gql_response).into_response())
}

/// WebSocket handler for subscriptions. The bearer token, if any, is read
/// from the `connection_init` payload.
async fn graphql_ws_handler(
    State(state): State<AppState>,
    protocol: GraphQLProtocol,
    upgrade: WebSocketUpgrade,
    schema: CatalogSchema,
) -> Response {
    let jwt_service = state.jwt_service().clone();

    upgrade
        .protocols(["graphql-transport-ws", "graphql-ws"])
        .on_upgrade(move |stream| {
            GraphQLWebSocket::new(stream, schema, protocol)
                .on_connection_init(move |value: serde_json::Value| async move {
                    let mut data = async_graphql::Data::default();
                    data.insert(connection_init_context(&jwt_service, &value));
                    Ok::<_, async_graphql::Error>(data)
                })
                .serve()
        })
}

/// Request context for a websocket session, from a `connection_init` payload
/// shaped like `{ "headers": { "Authorization": "Bearer <token>" } }`.
pub(crate) fn connection_init_context(
    jwt_service: &JwtService,
    payload: &serde_json::Value,
) -> RequestContext {
    let claims = payload
        .get("headers")
        .and_then(|h| h.get("Authorization"))
        .and_then(|v| v.as_str())
        .and_then(|s| s.strip_prefix("Bearer "))
        .and_then(|token| match jwt_service.verify_token(token) {
            Ok(claims) => Some(claims),
            Err(e) => {
                tracing::warn!("Ignoring websocket token: {}", e);
                None
            }
        });

    RequestContext::from(claims)
}

async fn graphiql() -> impl IntoResponse {
    Html(
        GraphiQLSource::build()
            .endpoint("/graphql")
            .subscription_endpoint("/graphql")
            .finish(),
    )
}

async fn health(State(state): State<AppState>) -> Result<&'static str, AppError> {
    if let Some(db) = &state.db {
        let _one: i32 = sqlx::query_scalar("SELECT 1").fetch_one(db).await?;
    }
    Ok("ok")
}
