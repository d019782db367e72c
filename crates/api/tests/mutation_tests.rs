mod common;

use async_graphql::Variables;
use infra::Repository;
use serde_json::json;

use common::*;

const ADD_MOVIE: &str = r#"
    mutation AddMovie($movie: MovieInput!) {
        addMovie(movie: $movie) {
            id
            title
            releaseDate
            rating
            status
            actors { id }
        }
    }
"#;

const ADD_ACTOR: &str = r#"
    mutation AddActor($actor: ActorInput!) {
        addActor(actor: $actor) { id name gender age }
    }
"#;

fn drunken_master() -> Variables {
    Variables::from_json(json!({
        "movie": {
            "title": "Drunken Master",
            "releaseDate": "1978-10-05",
            "rating": 4,
            "status": "WATCHED",
            "actors": ["jackie"]
        }
    }))
}

#[tokio::test]
async fn test_add_movie_without_user_is_a_silent_no_op() {
    let (state, schema) = setup_schema();
    let before = state.movies.find_all().await.unwrap();

    let data = query_json(&schema, ADD_MOVIE, Some(drunken_master()), None).await;

    let returned = data["addMovie"].as_array().unwrap();
    assert_eq!(returned.len(), before.len());
    assert!(returned.iter().all(|m| m["title"] != "Drunken Master"));
    assert_eq!(state.movies.find_all().await.unwrap(), before);
}

#[tokio::test]
async fn test_add_movie_with_empty_user_is_a_silent_no_op() {
    let (state, schema) = setup_schema();
    let before = state.movies.find_all().await.unwrap().len();

    query_json(&schema, ADD_MOVIE, Some(drunken_master()), Some("")).await;

    assert_eq!(state.movies.find_all().await.unwrap().len(), before);
}

#[tokio::test]
async fn test_add_movie_with_whitespace_user_is_authenticated() {
    let (state, schema) = setup_schema();
    let before = state.movies.find_all().await.unwrap().len();

    let data = query_json(&schema, ADD_MOVIE, Some(drunken_master()), Some("  ")).await;

    assert_eq!(data["addMovie"].as_array().unwrap().len(), before + 1);
    assert_eq!(state.movies.find_all().await.unwrap().len(), before + 1);
}

#[tokio::test]
async fn test_add_movie_returns_full_updated_collection() {
    let (state, schema) = setup_schema();
    let before = state.movies.find_all().await.unwrap().len();

    let data = query_json(&schema, ADD_MOVIE, Some(drunken_master()), Some("user-1")).await;

    let returned = data["addMovie"].as_array().unwrap();
    assert_eq!(returned.len(), before + 1);
    assert_eq!(state.movies.find_all().await.unwrap().len(), before + 1);

    let added = returned.last().unwrap();
    assert!(!added["id"].as_str().unwrap().is_empty());
    assert_eq!(added["title"], "Drunken Master");
    assert_eq!(added["releaseDate"], "1978-10-05");
    assert_eq!(added["rating"], 4);
    assert_eq!(added["status"], "WATCHED");
    assert_eq!(added["actors"], json!([{ "id": "jackie" }]));
}

#[tokio::test]
async fn test_add_movie_defaults_status_to_unknown() {
    let (_, schema) = setup_schema();

    let data = query_json(
        &schema,
        ADD_MOVIE,
        Some(Variables::from_json(json!({ "movie": { "title": "Fist of Legend" } }))),
        Some("user-1"),
    )
    .await;

    let added = data["addMovie"].as_array().unwrap().last().unwrap().clone();
    assert_eq!(added["status"], "UNKNOWN");
    assert!(added["releaseDate"].is_null());
    assert!(added["rating"].is_null());
}

#[tokio::test]
async fn test_integer_release_date_literal_is_a_timestamp() {
    let (_, schema) = setup_schema();

    let data = query_json(
        &schema,
        r#"mutation {
            addMovie(movie: { title: "Police Story", releaseDate: 503884800 }) {
                title
                releaseDate
            }
        }"#,
        None,
        Some("user-1"),
    )
    .await;

    let added = data["addMovie"].as_array().unwrap().last().unwrap().clone();
    assert_eq!(added["releaseDate"], json!(503884800));
}

#[tokio::test]
async fn test_added_movie_is_readable_by_id() {
    let (_, schema) = setup_schema();

    let data = query_json(&schema, ADD_MOVIE, Some(drunken_master()), Some("user-1")).await;
    let id = data["addMovie"].as_array().unwrap().last().unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let data = query_json(
        &schema,
        "query Movie($id: ID) { movie(id: $id) { id title } }",
        Some(Variables::from_json(json!({ "id": id }))),
        None,
    )
    .await;
    assert_eq!(data["movie"]["id"], id.as_str());
    assert_eq!(data["movie"]["title"], "Drunken Master");
}

#[tokio::test]
async fn test_add_actor_mirrors_add_movie() {
    let (state, schema) = setup_schema();
    let before = state.actors.find_all().await.unwrap().len();

    let vars = || {
        Variables::from_json(json!({
            "actor": { "name": "Michelle Yeoh", "gender": "female", "age": 62 }
        }))
    };

    let data = query_json(&schema, ADD_ACTOR, Some(vars()), None).await;
    assert_eq!(data["addActor"].as_array().unwrap().len(), before);

    let data = query_json(&schema, ADD_ACTOR, Some(vars()), Some("user-1")).await;
    let returned = data["addActor"].as_array().unwrap();
    assert_eq!(returned.len(), before + 1);

    let added = returned.last().unwrap();
    assert_eq!(added["name"], "Michelle Yeoh");
    assert_eq!(added["gender"], "female");
    assert_eq!(added["age"], 62);
}

#[tokio::test]
async fn test_writes_fail_soft_when_store_unreachable() {
    let schema = unreachable_schema();

    let data = query_json(&schema, ADD_MOVIE, Some(drunken_master()), Some("user-1")).await;
    assert_eq!(data["addMovie"], json!([]));

    let data = query_json(&schema, ADD_MOVIE, Some(drunken_master()), None).await;
    assert_eq!(data["addMovie"], json!([]));

    let data = query_json(
        &schema,
        ADD_ACTOR,
        Some(Variables::from_json(json!({ "actor": { "name": "Sammo Hung" } }))),
        Some("user-1"),
    )
    .await;
    assert_eq!(data["addActor"], json!([]));
}
