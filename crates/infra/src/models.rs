use sqlx::FromRow;

use crate::store::Entity;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "movie_status", rename_all = "snake_case")]
pub enum MovieStatus {
    Watched,
    Interested,
    NotInterested,
    #[default]
    Unknown,
}

/// A stored movie. Actors are referenced by id only and resolved at read time.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct MovieRow {
    pub id: String,
    pub title: String,
    /// Opaque value; whatever the client sent is stored as-is.
    #[sqlx(json)]
    pub release_date: serde_json::Value,
    pub rating: Option<i32>,
    pub status: MovieStatus,
    pub actor_ids: Vec<String>,
}

impl MovieRow {
    pub fn features_actor(&self, actor_id: &str) -> bool {
        self.actor_ids.iter().any(|id| id == actor_id)
    }
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ActorRow {
    pub id: String,
    pub name: String,
    pub gender: Option<String>,
    pub age: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct NewMovie {
    pub title: String,
    pub release_date: serde_json::Value,
    pub rating: Option<i32>,
    pub status: MovieStatus,
    pub actor_ids: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewActor {
    pub name: String,
    pub gender: Option<String>,
    pub age: Option<i32>,
}

impl Entity for MovieRow {
    type Draft = NewMovie;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: NewMovie) -> Self {
        Self {
            id,
            title: draft.title,
            release_date: draft.release_date,
            rating: draft.rating,
            status: draft.status,
            actor_ids: draft.actor_ids,
        }
    }
}

impl Entity for ActorRow {
    type Draft = NewActor;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: NewActor) -> Self {
        Self {
            id,
            name: draft.name,
            gender: draft.gender,
            age: draft.age,
        }
    }
}
