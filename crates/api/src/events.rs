//! Topic-keyed fan-out of catalog creation events.
//!
//! Each topic owns a `broadcast` channel. Listeners only see events published
//! while they are subscribed; nothing is replayed or persisted.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::broadcast;

use infra::{ActorRow, MovieRow};

const CHANNEL_CAPACITY: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topic {
    MovieAdded,
    ActorAdded,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::MovieAdded => "MOVIE_ADDED",
            Topic::ActorAdded => "ACTOR_ADDED",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CatalogEvent {
    MovieAdded(MovieRow),
    ActorAdded(ActorRow),
}

impl CatalogEvent {
    pub fn topic(&self) -> Topic {
        match self {
            CatalogEvent::MovieAdded(_) => Topic::MovieAdded,
            CatalogEvent::ActorAdded(_) => Topic::ActorAdded,
        }
    }
}

#[derive(Clone, Default)]
pub struct EventBus {
    topics: Arc<Mutex<HashMap<Topic, broadcast::Sender<CatalogEvent>>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Dropping the receiver unsubscribes it.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<CatalogEvent> {
        let mut topics = self.topics.lock();
        topics
            .entry(topic)
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .subscribe()
    }

    /// Deliver `event` to everyone currently subscribed to its topic.
    /// Returns how many listeners it reached.
    pub fn publish(&self, event: CatalogEvent) -> usize {
        let topic = event.topic();
        let sender = self.topics.lock().get(&topic).cloned();

        let delivered = sender.and_then(|tx| tx.send(event).ok()).unwrap_or(0);
        tracing::debug!(%topic, delivered, "published catalog event");
        delivered
    }

    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.topics
            .lock()
            .get(&topic)
            .map(|tx| tx.receiver_count())
            .unwrap_or(0)
    }

    /// Drop a topic's channel, ending every stream currently attached to it.
    pub fn close(&self, topic: Topic) {
        self.topics.lock().remove(&topic);
    }
}
