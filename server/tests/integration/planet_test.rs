use axum::http::StatusCode;
use serde_json::Value;

use crate::helpers::test_server;

#[tokio::test]
async fn should_list_all_planets_in_ok_envelope() {
    let (server, _db) = test_server().await;

    let resp = server.get("/planets").await;
    assert_eq!(resp.status_code(), StatusCode::OK);

    let json: Value = resp.json();
    assert_eq!(json["msg"], "ok");
    let info = json["info"].as_array().unwrap();
    assert_eq!(info.len(), 2);
    assert_eq!(info[0]["name"], "Tatooine");
    assert_eq!(info[0]["climate"], "arid");
    assert_eq!(info[0]["rotation_period"], 23);
}

#[tokio::test]
async fn should_get_single_planet() {
    let (server, _db) = test_server().await;

    let resp = server.get("/planets/2").await;
    assert_eq!(resp.status_code(), StatusCode::OK);

    let json: Value = resp.json();
    assert_eq!(json["msg"], "ok");
    assert_eq!(json["info"]["id"], 2);
    assert_eq!(json["info"]["name"], "Hoth");
}

#[tokio::test]
async fn should_return_400_naming_id_for_missing_planet() {
    let (server, _db) = test_server().await;

    let resp = server.get("/planets/99").await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);

    let json: Value = resp.json();
    assert_eq!(json["kind"], "PLANET_NOT_FOUND");
    assert_eq!(json["error"], "the planet with id 99 does not exist");
}

#[tokio::test]
async fn should_list_all_people_in_ok_envelope() {
    let (server, _db) = test_server().await;

    let resp = server.get("/people").await;
    assert_eq!(resp.status_code(), StatusCode::OK);

    let json: Value = resp.json();
    assert_eq!(json["msg"], "ok");
    let info = json["info"].as_array().unwrap();
    assert_eq!(info.len(), 2);
    assert_eq!(info[1]["name"], "Chewbacca");
    assert_eq!(info[1]["birth_year"], "200BBY");
}

#[tokio::test]
async fn should_return_400_naming_id_for_missing_person() {
    let (server, _db) = test_server().await;

    let resp = server.get("/people/42").await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);

    let json: Value = resp.json();
    assert_eq!(json["kind"], "PERSON_NOT_FOUND");
    assert_eq!(json["error"], "the person with id 42 does not exist");
}
