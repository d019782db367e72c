use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::auth::Claims;
use crate::state::AppState;

/// Validates a `Bearer` token when one is present and stores its claims in the
/// request extensions. A missing or invalid token leaves the request anonymous.
pub async fn jwt_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(str::to_owned);

    if let Some(token) = token {
        match state.jwt_service().verify_token(&token) {
            Ok(claims) => {
                request.extensions_mut().insert::<Claims>(claims);
            }
            Err(e) => {
                tracing::warn!("Ignoring bearer token: {}", e);
            }
        }
    }

    next.run(request).await
}
