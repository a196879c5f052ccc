// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, API_KEY};
use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_openkj_venue_lifecycle() {
    let app = create_test_app().await;
    let venue_id = app.insert_venue("Main Stage", false).await;

    let serial = app.openkj(json!({ "command": "getSerial" })).await;
    assert_eq!(serial["serial"], 0);

    let accepting = app
        .openkj(json!({ "command": "setAccepting", "venue_id": venue_id, "accepting": "1" }))
        .await;
    assert_eq!(accepting["error"], false);
    assert_eq!(accepting["accepting"], true);
    assert_eq!(accepting["serial"], 1);

    app.server
        .post("/api/requests")
        .json(&json!({
            "venue_id": venue_id,
            "artist": "Queen",
            "title": "Bohemian Rhapsody",
            "singer_name": "Freddie"
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let requests = app
        .openkj(json!({ "command": "getRequests", "venue_id": venue_id }))
        .await;
    assert_eq!(requests["serial"], 2);
    let request_id = requests["requests"][0]["request_id"].as_i64().unwrap();
    assert_eq!(requests["requests"][0]["singer"], "Freddie");
    assert!(requests["requests"][0]["request_time"].is_i64());

    let deleted = app
        .openkj(json!({
            "command": "deleteRequest",
            "venue_id": venue_id,
            "request_id": request_id
        }))
        .await;
    assert_eq!(deleted["error"], false);
    assert_eq!(deleted["serial"], 3);

    let missing = app
        .openkj(json!({
            "command": "deleteRequest",
            "venue_id": venue_id,
            "request_id": request_id
        }))
        .await;
    assert_eq!(missing["errorString"], "Request not found.");

    let venues = app.openkj(json!({ "command": "getVenues" })).await;
    assert_eq!(venues["venues"][0]["name"], "Main Stage");
    assert_eq!(venues["venues"][0]["accepting"], true);

    let count = app
        .openkj(json!({ "command": "getEntitledSystemCount" }))
        .await;
    assert_eq!(count["count"], 1);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_openkj_authentication_and_venue_checks() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/api/openkj")
        .json(&json!({ "command": "getSerial", "api_key": "wrong" }))
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["errorString"],
        "Authentication failed: Invalid API key."
    );

    let unknown = app
        .openkj(json!({ "command": "getRequests", "venue_id": 4242 }))
        .await;
    assert_eq!(unknown["errorString"], "Operation failed: Venue ID 4242 not found.");

    let form = app
        .server
        .post("/api/openkj")
        .text(format!("command=getSerial&api_key={}", API_KEY))
        .await
        .json::<Value>();
    assert_eq!(form["error"], false);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_add_songs_and_clear_database() {
    let app = create_test_app().await;

    let added = app
        .openkj(json!({
            "command": "addSongs",
            "songs": [
                { "artist": "ABBA", "title": "Waterloo" },
                { "artist": "ABBA", "title": "Waterloo" },
                { "artist": "", "title": "Nameless" }
            ]
        }))
        .await;
    assert_eq!(added["error"], true);
    assert_eq!(added["entries processed"], 2);
    assert_eq!(added["errors"].as_array().unwrap().len(), 1);
    assert_eq!(added["serial"], 1);

    let search = app
        .server
        .get("/api/songs/search")
        .add_query_param("artist", "abba")
        .await
        .json::<Value>();
    assert_eq!(search["totalItems"], 1);

    let cleared = app.openkj(json!({ "command": "clearDatabase" })).await;
    assert_eq!(cleared["serial"], 2);

    let search = app
        .server
        .get("/api/songs/search")
        .add_query_param("artist", "abba")
        .await
        .json::<Value>();
    assert_eq!(search["totalItems"], 0);
}
