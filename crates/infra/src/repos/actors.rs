use async_trait::async_trait;
use sqlx::{PgExecutor, Result as SqlxResult};

use crate::db::Db;
use crate::models::{ActorRow, NewActor};
use crate::store::{Repository, StoreResult};

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<ActorRow>> {
    sqlx::query_as::<_, ActorRow>(
        r#"
        SELECT id, name, gender, age
        FROM actors
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: &str,
) -> SqlxResult<Option<ActorRow>> {
    sqlx::query_as::<_, ActorRow>(
        r#"
        SELECT id, name, gender, age
        FROM actors
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn create<'e>(executor: impl PgExecutor<'e>, data: NewActor) -> SqlxResult<ActorRow> {
    sqlx::query_as::<_, ActorRow>(
        r#"
        INSERT INTO actors (name, gender, age)
        VALUES ($1, $2, $3)
        RETURNING id, name, gender, age
        "#,
    )
    .bind(&data.name)
    .bind(&data.gender)
    .bind(data.age)
    .fetch_one(executor)
    .await
}

/// PostgreSQL-backed actor store.
#[derive(Clone)]
pub struct ActorRepo {
    db: Db,
}

impl ActorRepo {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository<ActorRow> for ActorRepo {
    async fn find_all(&self) -> StoreResult<Vec<ActorRow>> {
        Ok(list(&self.db).await?)
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<ActorRow>> {
        Ok(get_by_id(&self.db, id).await?)
    }

    async fn create(&self, draft: NewActor) -> StoreResult<ActorRow> {
        Ok(create(&self.db, draft).await?)
    }
}
