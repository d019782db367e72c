use async_graphql::{Enum, InputObject, SimpleObject, ID};

use crate::gql::scalars::Date;

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug, Default)]
#[graphql(name = "Status")]
pub enum MovieStatus {
    #[graphql(name = "WATCHED")]
    Watched,
    #[graphql(name = "INTERESTED")]
    Interested,
    #[graphql(name = "NOT_INTERESTED")]
    NotInterested,
    #[graphql(name = "UNKNOWN")]
    #[default]
    Unknown,
}

impl From<infra::MovieStatus> for MovieStatus {
    fn from(status: infra::MovieStatus) -> Self {
        match status {
            infra::MovieStatus::Watched => MovieStatus::Watched,
            infra::MovieStatus::Interested => MovieStatus::Interested,
            infra::MovieStatus::NotInterested => MovieStatus::NotInterested,
            infra::MovieStatus::Unknown => MovieStatus::Unknown,
        }
    }
}

impl From<MovieStatus> for infra::MovieStatus {
    fn from(status: MovieStatus) -> Self {
        match status {
            MovieStatus::Watched => infra::MovieStatus::Watched,
            MovieStatus::Interested => infra::MovieStatus::Interested,
            MovieStatus::NotInterested => infra::MovieStatus::NotInterested,
            MovieStatus::Unknown => infra::MovieStatus::Unknown,
        }
    }
}

/// Every field is nullable: a lookup miss renders as an empty record.
#[derive(SimpleObject, Clone, Debug, Default)]
#[graphql(complex)]
pub struct Movie {
    pub id: Option<ID>,
    pub title: Option<String>,
    pub release_date: Option<Date>,
    pub rating: Option<i32>,
    pub status: Option<MovieStatus>,
    #[graphql(skip)]
    pub actor_ids: Vec<String>,
}

impl From<infra::MovieRow> for Movie {
    fn from(row: infra::MovieRow) -> Self {
        Self {
            id: Some(row.id.into()),
            title: Some(row.title),
            release_date: Date::from_stored(row.release_date),
            rating: row.rating,
            status: Some(row.status.into()),
            actor_ids: row.actor_ids,
        }
    }
}

#[derive(InputObject, Clone, Debug)]
pub struct MovieInput {
    pub title: String,
    pub release_date: Option<Date>,
    pub rating: Option<i32>,
    pub status: Option<MovieStatus>,
    /// Ids of actors appearing in the movie; they need not exist yet.
    pub actors: Option<Vec<ID>>,
}

impl From<MovieInput> for infra::NewMovie {
    fn from(input: MovieInput) -> Self {
        Self {
            title: input.title,
            release_date: Date::into_stored(input.release_date),
            rating: input.rating,
            status: input.status.unwrap_or_default().into(),
            actor_ids: input
                .actors
                .unwrap_or_default()
                .into_iter()
                .map(|id| id.0)
                .collect(),
        }
    }
}
