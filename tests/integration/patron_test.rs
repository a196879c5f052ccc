// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, ADMIN_PASSWORD};
use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_bootstrap_admin_can_log_in() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/api/auth/login")
        .json(&json!({ "username": "admin", "password": ADMIN_PASSWORD }))
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["user"]["email"], "admin@localhost");
    assert_eq!(body["user"]["isAdmin"], true);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_patron_favorites_round() {
    let app = create_test_app().await;
    app.openkj(json!({
        "command": "addSongs",
        "songs": [{ "artist": "ABBA", "title": "Waterloo" }]
    }))
    .await;
    let song_id = app
        .server
        .get("/api/songs/search")
        .add_query_param("artist", "abba")
        .await
        .json::<Value>()["songs"][0]["song_id"]
        .as_i64()
        .unwrap();

    app.server
        .post("/api/patron/auth/register")
        .json(&json!({ "email": "fan@example.com", "password": "pw", "mobile_number": "555" }))
        .await
        .assert_status(StatusCode::CREATED);

    app.server
        .post("/api/patron/auth/register")
        .json(&json!({ "email": "other@example.com", "password": "pw", "mobile_number": "555" }))
        .await
        .assert_status(StatusCode::CONFLICT);

    let token = app
        .server
        .post("/api/patron/auth/login")
        .json(&json!({ "email": "fan@example.com", "password": "pw" }))
        .await
        .json::<Value>()["token"]
        .as_str()
        .unwrap()
        .to_string();
    let bearer = format!("Bearer {}", token);

    app.server
        .post("/api/patron/favorites")
        .add_header("Authorization", bearer.clone())
        .json(&json!({ "song_id": song_id }))
        .await
        .assert_status(StatusCode::CREATED);

    app.server
        .post("/api/patron/favorites")
        .add_header("Authorization", bearer.clone())
        .json(&json!({ "song_id": song_id }))
        .await
        .assert_status_ok();

    let list = app
        .server
        .get("/api/patron/favorites")
        .add_header("Authorization", bearer.clone())
        .await
        .json::<Value>();
    assert_eq!(list["favorites"][0]["title"], "Waterloo");

    // Clearing the songbook cascades to favorites
    app.openkj(json!({ "command": "clearDatabase" })).await;
    let list = app
        .server
        .get("/api/patron/favorites")
        .add_header("Authorization", bearer)
        .await
        .json::<Value>();
    assert_eq!(list["favorites"], json!([]));
}
