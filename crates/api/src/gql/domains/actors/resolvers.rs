use async_graphql::{ComplexObject, Context, Object, Result, ID};

use super::types::{Actor, ActorInput};
use crate::auth::request_context;
use crate::events::CatalogEvent;
use crate::gql::domains::movies::Movie;
use crate::gql::error::FailSoft;
use crate::state::AppState;

#[derive(Default)]
pub struct ActorQuery;

#[Object]
impl ActorQuery {
    async fn actors(&self, ctx: &Context<'_>) -> Result<Vec<Actor>> {
        let state = ctx.data::<AppState>()?;
        Ok(all_actors(state, "actors").await)
    }

    /// Look up an actor by id. A miss yields an empty record, not an error.
    async fn actor(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Actor> {
        let state = ctx.data::<AppState>()?;
        let Some(id) = id else {
            return Ok(Actor::default());
        };

        let found = state.actors.find_by_id(id.as_str()).await.or_empty("actor");
        if found.is_none() {
            tracing::debug!(id = id.as_str(), "actor not found");
        }
        Ok(found.map(Actor::from).unwrap_or_default())
    }
}

#[derive(Default)]
pub struct ActorMutation;

#[Object]
impl ActorMutation {
    /// Add an actor and return the whole collection after insertion.
    async fn add_actor(&self, ctx: &Context<'_>, actor: ActorInput) -> Result<Vec<Actor>> {
        let state = ctx.data::<AppState>()?;
        let request = request_context(ctx);

        let Some(user_id) = request.authenticated_user() else {
            tracing::info!("addActor called without an authenticated user, skipping");
            return Ok(all_actors(state, "addActor").await);
        };

        let created = match state.actors.create(actor.into()).await {
            Ok(row) => row,
            Err(e) => {
                tracing::error!(operation = "addActor", error = %e, "failed to create actor");
                return Ok(Vec::new());
            }
        };

        tracing::info!(user_id, actor_id = %created.id, "actor added");
        state.events.publish(CatalogEvent::ActorAdded(created));

        Ok(all_actors(state, "addActor").await)
    }
}

#[ComplexObject]
impl Actor {
    /// Movies whose cast references this actor.
    async fn movies(&self, ctx: &Context<'_>) -> Result<Vec<Movie>> {
        let Some(id) = &self.id else {
            return Ok(Vec::new());
        };

        let state = ctx.data::<AppState>()?;
        Ok(state
            .movies
            .find_all()
            .await
            .or_empty("Actor.movies")
            .into_iter()
            .filter(|m| m.features_actor(id.as_str()))
            .map(Movie::from)
            .collect())
    }
}

async fn all_actors(state: &AppState, operation: &'static str) -> Vec<Actor> {
    state
        .actors
        .find_all()
        .await
        .or_empty(operation)
        .into_iter()
        .map(Actor::from)
        .collect()
}
