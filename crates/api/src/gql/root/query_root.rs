use async_graphql::MergedObject;

use crate::gql::domains::actors::ActorQuery;
use crate::gql::domains::movies::MovieQuery;

#[derive(MergedObject, Default)]
pub struct QueryRoot(MovieQuery, ActorQuery);
