use axum::http::StatusCode;
use sea_orm::EntityTrait;
use serde_json::{Value, json};

use holocron_schema::{favorite_people, favorite_planets};

use crate::helpers::test_server;

#[tokio::test]
async fn should_add_exactly_one_join_row_and_return_updated_user() {
    let (server, db) = test_server().await;

    let resp = server
        .post("/favorite/planet/1")
        .json(&json!({"user_id": 1}))
        .await;
    assert_eq!(resp.status_code(), StatusCode::OK);

    let json: Value = resp.json();
    assert_eq!(json["message"], "favorite planet has been saved");
    assert_eq!(json["user"]["id"], 1);
    let favorites = json["user"]["favorite_planets"].as_array().unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0]["id"], 1);

    let rows = favorite_planets::Entity::find().all(&db).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!((rows[0].user_id, rows[0].planet_id), (1, 1));
}

#[tokio::test]
async fn should_reject_duplicate_favorite_with_409_and_leave_table_unchanged() {
    let (server, db) = test_server().await;

    server
        .post("/favorite/planet/1")
        .json(&json!({"user_id": 1}))
        .await
        .assert_status_ok();

    let resp = server
        .post("/favorite/planet/1")
        .json(&json!({"user_id": 1}))
        .await;
    assert_eq!(resp.status_code(), StatusCode::CONFLICT);

    let json: Value = resp.json();
    assert_eq!(json["kind"], "FAVORITE_ALREADY_EXISTS");

    let rows = favorite_planets::Entity::find().all(&db).await.unwrap();
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn should_return_404_when_favoriting_for_unknown_user() {
    let (server, db) = test_server().await;

    let resp = server
        .post("/favorite/planet/1")
        .json(&json!({"user_id": 99}))
        .await;
    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);

    let json: Value = resp.json();
    assert_eq!(json["kind"], "USER_NOT_FOUND");

    let rows = favorite_planets::Entity::find().all(&db).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn should_return_404_when_favoriting_unknown_planet() {
    let (server, _db) = test_server().await;

    let resp = server
        .post("/favorite/planet/99")
        .json(&json!({"user_id": 1}))
        .await;
    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);

    let json: Value = resp.json();
    assert_eq!(json["kind"], "FAVORITE_PLANET_NOT_FOUND");
    assert_eq!(json["error"], "planet not found");
}

#[tokio::test]
async fn should_return_404_deleting_favorite_that_was_never_added() {
    let (server, db) = test_server().await;

    // Another user's favorite must not be touched by the miss below.
    server
        .post("/favorite/planet/1")
        .json(&json!({"user_id": 2}))
        .await
        .assert_status_ok();

    let resp = server
        .delete("/favorite/planet/1")
        .json(&json!({"user_id": 1}))
        .await;
    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);

    let json: Value = resp.json();
    assert_eq!(json["kind"], "PLANET_NOT_FAVORITED");

    let rows = favorite_planets::Entity::find().all(&db).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!((rows[0].user_id, rows[0].planet_id), (2, 1));
}

#[tokio::test]
async fn should_round_trip_add_then_delete_back_to_zero_favorites() {
    let (server, db) = test_server().await;

    server
        .post("/favorite/planet/2")
        .json(&json!({"user_id": 1}))
        .await
        .assert_status_ok();

    let resp = server
        .delete("/favorite/planet/2")
        .json(&json!({"user_id": 1}))
        .await;
    assert_eq!(resp.status_code(), StatusCode::OK);

    let json: Value = resp.json();
    assert_eq!(json["message"], "favorite planet has been deleted");
    assert_eq!(
        json["user"]["favorite_planets"].as_array().unwrap().len(),
        0
    );

    let rows = favorite_planets::Entity::find().all(&db).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn should_add_and_delete_favorite_person() {
    let (server, db) = test_server().await;

    let resp = server
        .post("/favorite/people/1")
        .json(&json!({"user_id": 1}))
        .await;
    assert_eq!(resp.status_code(), StatusCode::OK);

    let json: Value = resp.json();
    assert_eq!(json["message"], "favorite person has been saved");
    let favorites = json["user"]["favorite_people"].as_array().unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0]["name"], "Obi-Wan Kenobi");

    let rows = favorite_people::Entity::find().all(&db).await.unwrap();
    assert_eq!(rows.len(), 1);

    let resp = server
        .delete("/favorite/people/1")
        .json(&json!({"user_id": 1}))
        .await;
    assert_eq!(resp.status_code(), StatusCode::OK);

    let rows = favorite_people::Entity::find().all(&db).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn should_return_404_deleting_unknown_person_favorite() {
    let (server, _db) = test_server().await;

    let resp = server
        .delete("/favorite/people/99")
        .json(&json!({"user_id": 1}))
        .await;
    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);

    let json: Value = resp.json();
    assert_eq!(json["kind"], "FAVORITE_PERSON_NOT_FOUND");

    let resp = server
        .delete("/favorite/people/2")
        .json(&json!({"user_id": 1}))
        .await;
    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);

    let json: Value = resp.json();
    assert_eq!(json["kind"], "PERSON_NOT_FAVORITED");
}
