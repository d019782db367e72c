use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::store::{Entity, Repository, StoreResult};

/// Process-lifetime store backed by an insertion-ordered vector.
///
/// Clones share the same underlying collection.
#[derive(Debug)]
pub struct MemoryRepo<T> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for MemoryRepo<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<T: Entity> Default for MemoryRepo<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: Entity> MemoryRepo<T> {
    pub fn new(seed: Vec<T>) -> Self {
        Self {
            records: Arc::new(RwLock::new(seed)),
        }
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for MemoryRepo<T> {
    async fn find_all(&self) -> StoreResult<Vec<T>> {
        Ok(self.records.read().clone())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<T>> {
        Ok(self.records.read().iter().find(|r| r.id() == id).cloned())
    }

    async fn create(&self, draft: T::Draft) -> StoreResult<T> {
        let record = T::from_draft(Uuid::new_v4().to_string(), draft);
        self.records.write().push(record.clone());
        tracing::debug!(id = record.id(), "record created in memory store");
        Ok(record)
    }
}
