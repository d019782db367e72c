use async_trait::async_trait;
use sqlx::{PgExecutor, Result as SqlxResult};

use crate::db::Db;
use crate::models::{MovieRow, NewMovie};
use crate::store::{Repository, StoreResult};

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<MovieRow>> {
    sqlx::query_as::<_, MovieRow>(
        r#"
        SELECT id, title, release_date, rating, status, actor_ids
        FROM movies
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: &str,
) -> SqlxResult<Option<MovieRow>> {
    sqlx::query_as::<_, MovieRow>(
        r#"
        SELECT id, title, release_date, rating, status, actor_ids
        FROM movies
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn create<'e>(executor: impl PgExecutor<'e>, data: NewMovie) -> SqlxResult<MovieRow> {
    sqlx::query_as::<_, MovieRow>(
        r#"
        INSERT INTO movies (title, release_date, rating, status, actor_ids)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, title, release_date, rating, status, actor_ids
        "#,
    )
    .bind(&data.title)
    .bind(sqlx::types::Json(&data.release_date))
    .bind(data.rating)
    .bind(data.status)
    .bind(&data.actor_ids)
    .fetch_one(executor)
    .await
}

/// PostgreSQL-backed movie store.
#[derive(Clone)]
pub struct MovieRepo {
    db: Db,
}

impl MovieRepo {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository<MovieRow> for MovieRepo {
    async fn find_all(&self) -> StoreResult<Vec<MovieRow>> {
        Ok(list(&self.db).await?)
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<MovieRow>> {
        Ok(get_by_id(&self.db, id).await?)
    }

    async fn create(&self, draft: NewMovie) -> StoreResult<MovieRow> {
        Ok(create(&self.db, draft).await?)
    }
}
