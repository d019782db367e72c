use async_graphql::Schema;

use super::{MutationRoot, QueryRoot, SubscriptionRoot};
use crate::state::AppState;

pub type CatalogSchema = Schema<QueryRoot, MutationRoot, SubscriptionRoot>;

/// Build the GraphQL schema and inject shared state (AppState) into the context.
pub fn build_schema(state: AppState, introspection: bool) -> CatalogSchema {
    let mut builder = Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        SubscriptionRoot,
    )
    .data(state) // available in resolvers via ctx.data::<AppState>()
    .limit_depth(10)
    .limit_complexity(200);

    if !introspection {
        builder = builder.disable_introspection();
    }

    builder.finish()
}
