//! Seed data for the in-memory store.

use serde_json::json;

use crate::models::{ActorRow, MovieRow, MovieStatus};

pub fn movies() -> Vec<MovieRow> {
    vec![
        MovieRow {
            id: "dkdfk".to_string(),
            title: "5 Deadly Venoms".to_string(),
            release_date: json!("10-10-1983"),
            rating: Some(5),
            status: MovieStatus::Unknown,
            actor_ids: Vec::new(),
        },
        MovieRow {
            id: "xsssksks".to_string(),
            title: "36th Chamber".to_string(),
            release_date: json!("10-10-1983"),
            rating: Some(5),
            status: MovieStatus::Interested,
            actor_ids: vec!["gordon".to_string(), "jackie".to_string()],
        },
    ]
}

pub fn actors() -> Vec<ActorRow> {
    vec![
        ActorRow {
            id: "gordon".to_string(),
            name: "Gordon Liu".to_string(),
            gender: Some("male".to_string()),
            age: None,
        },
        ActorRow {
            id: "jackie".to_string(),
            name: "Jackie Chan".to_string(),
            gender: Some("male".to_string()),
            age: None,
        },
    ]
}
