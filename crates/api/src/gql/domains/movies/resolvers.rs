use async_graphql::{ComplexObject, Context, Object, Result, ID};

use infra::ActorRow;

use super::types::{Movie, MovieInput};
use crate::auth::request_context;
use crate::events::CatalogEvent;
use crate::gql::domains::actors::Actor;
use crate::gql::error::FailSoft;
use crate::state::AppState;

#[derive(Default)]
pub struct MovieQuery;

#[Object]
impl MovieQuery {
    async fn movies(&self, ctx: &Context<'_>) -> Result<Vec<Movie>> {
        let state = ctx.data::<AppState>()?;
        Ok(all_movies(state, "movies").await)
    }

    /// Look up a movie by id. A miss yields an empty record, not an error.
    async fn movie(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Movie> {
        let state = ctx.data::<AppState>()?;
        let Some(id) = id else {
            return Ok(Movie::default());
        };

        let found = state.movies.find_by_id(id.as_str()).await.or_empty("movie");
        if found.is_none() {
            tracing::debug!(id = id.as_str(), "movie not found");
        }
        Ok(found.map(Movie::from).unwrap_or_default())
    }
}

#[derive(Default)]
pub struct MovieMutation;

#[Object]
impl MovieMutation {
    /// Add a movie and return the whole collection after insertion.
    ///
    /// Without an authenticated user nothing is written and the current
    /// collection is returned as-is.
    async fn add_movie(&self, ctx: &Context<'_>, movie: MovieInput) -> Result<Vec<Movie>> {
        let state = ctx.data::<AppState>()?;
        let request = request_context(ctx);

        let Some(user_id) = request.authenticated_user() else {
            tracing::info!("addMovie called without an authenticated user, skipping");
            return Ok(all_movies(state, "addMovie").await);
        };

        let created = match state.movies.create(movie.into()).await {
            Ok(row) => row,
            Err(e) => {
                tracing::error!(operation = "addMovie", error = %e, "failed to create movie");
                return Ok(Vec::new());
            }
        };

        tracing::info!(user_id, movie_id = %created.id, "movie added");
        state.events.publish(CatalogEvent::MovieAdded(created));

        Ok(all_movies(state, "addMovie").await)
    }
}

#[ComplexObject]
impl Movie {
    /// Actors referenced by this movie. Ids with no stored actor are skipped.
    async fn actors(&self, ctx: &Context<'_>) -> Result<Vec<Actor>> {
        if self.actor_ids.is_empty() {
            return Ok(Vec::new());
        }

        let state = ctx.data::<AppState>()?;
        let actors = state.actors.find_all().await.or_empty("Movie.actors");
        Ok(resolve_cast(&self.actor_ids, actors))
    }
}

async fn all_movies(state: &AppState, operation: &'static str) -> Vec<Movie> {
    state
        .movies
        .find_all()
        .await
        .or_empty(operation)
        .into_iter()
        .map(Movie::from)
        .collect()
}

/// Keep the actors whose id appears in `actor_ids`, in store order.
pub fn resolve_cast(actor_ids: &[String], actors: Vec<ActorRow>) -> Vec<Actor> {
    actors
        .into_iter()
        .filter(|a| actor_ids.contains(&a.id))
        .map(Actor::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(id: &str) -> ActorRow {
        ActorRow {
            id: id.to_string(),
            name: id.to_uppercase(),
            gender: None,
            age: None,
        }
    }

    #[test]
    fn resolve_cast_keeps_only_referenced_actors() {
        let ids = vec!["gordon".to_string(), "jackie".to_string()];
        let stored = vec![actor("unknown"), actor("jackie"), actor("gordon")];

        let mut names: Vec<String> = resolve_cast(&ids, stored)
            .into_iter()
            .filter_map(|a| a.id.map(|id| id.0))
            .collect();
        names.sort();

        assert_eq!(names, vec!["gordon", "jackie"]);
    }

    #[test]
    fn resolve_cast_tolerates_dangling_ids() {
        let ids = vec!["ghost".to_string()];
        assert!(resolve_cast(&ids, vec![actor("gordon")]).is_empty());
    }
}
