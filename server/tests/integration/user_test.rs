use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::test_server;

#[tokio::test]
async fn should_serialize_users_with_embedded_favorite_objects() {
    let (server, _db) = test_server().await;

    // Give user 1 one favorite of each kind first.
    server
        .post("/favorite/planet/1")
        .json(&json!({"user_id": 1}))
        .await
        .assert_status_ok();
    server
        .post("/favorite/people/2")
        .json(&json!({"user_id": 1}))
        .await
        .assert_status_ok();

    let resp = server.get("/user").await;
    assert_eq!(resp.status_code(), StatusCode::OK);

    let json: Value = resp.json();
    assert_eq!(json["msg"], "ok");
    let users = json["info"].as_array().unwrap();
    assert_eq!(users.len(), 2);

    let luke = &users[0];
    assert_eq!(luke["id"], 1);
    assert_eq!(luke["email"], "luke@rebellion.example");
    // Credentials never serialize.
    assert!(luke.get("password").is_none());
    assert!(luke.get("is_active").is_none());

    // Favorites are full objects, not bare ids.
    let favorite_planets = luke["favorite_planets"].as_array().unwrap();
    assert_eq!(favorite_planets.len(), 1);
    assert_eq!(favorite_planets[0]["name"], "Tatooine");
    assert_eq!(favorite_planets[0]["terrain"], "desert");

    let favorite_people = luke["favorite_people"].as_array().unwrap();
    assert_eq!(favorite_people.len(), 1);
    assert_eq!(favorite_people[0]["name"], "Chewbacca");

    // User 2 has favorited nothing; lists are present and empty.
    let leia = &users[1];
    assert_eq!(leia["favorite_planets"].as_array().unwrap().len(), 0);
    assert_eq!(leia["favorite_people"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn should_return_user_favorites_from_live_relations() {
    let (server, _db) = test_server().await;

    server
        .post("/favorite/planet/2")
        .json(&json!({"user_id": 2}))
        .await
        .assert_status_ok();

    let resp = server.get("/user/2/favorites").await;
    assert_eq!(resp.status_code(), StatusCode::OK);

    let json: Value = resp.json();
    let planets = json["favorite_planets"].as_array().unwrap();
    assert_eq!(planets.len(), 1);
    assert_eq!(planets[0]["name"], "Hoth");
    assert_eq!(json["favorite_people"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn should_return_404_for_unknown_user_favorites() {
    let (server, _db) = test_server().await;

    let resp = server.get("/user/99/favorites").await;
    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);

    let json: Value = resp.json();
    assert_eq!(json["kind"], "USER_NOT_FOUND");
}
