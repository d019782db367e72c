use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Db(sqlx::Error),

    /// The backing store could not be reached at all (no connection, pool
    /// exhausted or shut down), as opposed to a query that failed.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                StoreError::Unavailable(err.to_string())
            }
            other => StoreError::Db(other),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A record owned by a `Repository`, identified by an opaque string id.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Field values supplied at creation, before an id is assigned.
    type Draft: Send + 'static;

    fn id(&self) -> &str;

    fn from_draft(id: String, draft: Self::Draft) -> Self;
}

/// The capability set every backing store offers to the resolvers.
///
/// `find_by_id` separates "not found" (`Ok(None)`) from a store failure
/// (`Err`); callers decide how much of that distinction to surface.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    async fn find_all(&self) -> StoreResult<Vec<T>>;

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<T>>;

    /// Persist a new record. The id is assigned here, exactly once.
    async fn create(&self, draft: T::Draft) -> StoreResult<T>;
}
