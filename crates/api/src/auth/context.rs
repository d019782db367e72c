use async_graphql::Context;

use crate::auth::Claims;

/// Per-request data handed to every resolver.
#[derive(Clone, Debug, Default)]
pub struct RequestContext {
    pub user_id: Option<String>,
}

impl RequestContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }

    /// The caller's identifier, if one was presented and it is non-empty.
    /// Any non-empty string counts, whitespace included.
    pub fn authenticated_user(&self) -> Option<&str> {
        self.user_id.as_deref().filter(|id| !id.is_empty())
    }
}

impl From<Option<Claims>> for RequestContext {
    fn from(claims: Option<Claims>) -> Self {
        Self {
            user_id: claims.map(|c| c.sub),
        }
    }
}

/// Fetch the request context, treating a request without one as anonymous.
pub fn request_context(ctx: &Context<'_>) -> RequestContext {
    ctx.data_opt::<RequestContext>().cloned().unwrap_or_default()
}
