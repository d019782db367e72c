use async_graphql::MergedObject;

use crate::gql::domains::actors::ActorMutation;
use crate::gql::domains::movies::MovieMutation;

#[derive(MergedObject, Default)]
pub struct MutationRoot(MovieMutation, ActorMutation);
