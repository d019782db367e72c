use async_graphql::{Context, Result, Subscription};
use futures_util::Stream;
use tokio::sync::broadcast::{self, error::RecvError};

use crate::events::{CatalogEvent, Topic};
use crate::gql::domains::actors::Actor;
use crate::gql::domains::movies::Movie;
use crate::state::AppState;

#[derive(Default)]
pub struct SubscriptionRoot;

#[Subscription]
impl SubscriptionRoot {
    /// Each movie created after the subscription starts.
    async fn movie_added(&self, ctx: &Context<'_>) -> Result<impl Stream<Item = Movie>> {
        let state = ctx.data::<AppState>()?;
        let rx = state.events.subscribe(Topic::MovieAdded);

        Ok(topic_stream(rx, |event| match event {
            CatalogEvent::MovieAdded(row) => Some(Movie::from(row)),
            _ => None,
        }))
    }

    /// Each actor created after the subscription starts.
    async fn actor_added(&self, ctx: &Context<'_>) -> Result<impl Stream<Item = Actor>> {
        let state = ctx.data::<AppState>()?;
        let rx = state.events.subscribe(Topic::ActorAdded);

        Ok(topic_stream(rx, |event| match event {
            CatalogEvent::ActorAdded(row) => Some(Actor::from(row)),
            _ => None,
        }))
    }
}

/// Turn a topic receiver into a stream of typed payloads. Lagged listeners
/// skip what they missed; the stream ends when the topic is closed.
fn topic_stream<T, F>(
    mut rx: broadcast::Receiver<CatalogEvent>,
    select: F,
) -> impl Stream<Item = T>
where
    F: Fn(CatalogEvent) -> Option<T>,
{
    async_stream::stream! {
        loop {
            match rx.recv().await {
                Ok(event) => {
                    if let Some(item) = select(event) {
                        yield item;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "subscriber lagged, dropping missed events");
                }
                Err(RecvError::Closed) => break,
            }
        }
    }
}
