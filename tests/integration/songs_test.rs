// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, TestApp};
use axum::http::StatusCode;
use serde_json::{json, Value};

async fn seed_songs(app: &TestApp) {
    let reply = app
        .openkj(json!({
            "command": "addSongs",
            "songs": [
                { "artist": "The Beatles", "title": "Hey Jude" },
                { "artist": "The Beatles", "title": "Let It Be" },
                { "artist": "Fifty Cent", "title": "In Da Club" },
                { "artist": "Queen", "title": "Bohemian Rhapsody" }
            ]
        }))
        .await;
    assert_eq!(reply["error"], false);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_full_text_search_variants() {
    let app = create_test_app().await;
    seed_songs(&app).await;

    let reversed = app
        .server
        .get("/api/songs/search")
        .add_query_param("q", "Beatles, The")
        .await
        .json::<Value>();
    assert_eq!(reversed["totalItems"], 2);

    let prefix = app
        .server
        .get("/api/songs/search")
        .add_query_param("q", "bohem")
        .await
        .json::<Value>();
    assert_eq!(prefix["songs"][0]["artist"], "Queen");

    let numeric = app
        .server
        .get("/api/songs/search")
        .add_query_param("q", "50 cent")
        .await
        .json::<Value>();
    assert_eq!(numeric["totalItems"], 1);
    assert_eq!(numeric["songs"][0]["title"], "In Da Club");

    let filtered = app
        .server
        .get("/api/songs/search")
        .add_query_param("q", "beatles")
        .add_query_param("title", "jude")
        .await
        .json::<Value>();
    assert_eq!(filtered["totalItems"], 1);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_artists_and_pagination() {
    let app = create_test_app().await;
    seed_songs(&app).await;

    let artists = app
        .server
        .get("/api/songs/artists")
        .await
        .json::<Value>();
    assert_eq!(artists["totalItems"], 3);
    assert_eq!(
        artists["artists"],
        json!(["Fifty Cent", "Queen", "The Beatles"])
    );

    let page = app
        .server
        .get("/api/songs/search")
        .add_query_param("size", "2")
        .add_query_param("page", "2")
        .await
        .json::<Value>();
    assert_eq!(page["totalItems"], 4);
    assert_eq!(page["totalPages"], 2);
    assert_eq!(page["currentPage"], 2);
    assert_eq!(page["songs"][0]["artist"], "The Beatles");

    app.server
        .get("/api/songs/not-a-number")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_out_of_range_page_is_empty() {
    let app = create_test_app().await;
    seed_songs(&app).await;

    for (path, params) in [
        ("/api/songs/artists", vec![]),
        ("/api/songs/search", vec![("artist", "beatles")]),
        ("/api/songs/search", vec![("q", "beatles")]),
    ] {
        let mut request = app
            .server
            .get(path)
            .add_query_param("page", "18446744073709551615");
        for (key, value) in params {
            request = request.add_query_param(key, value);
        }
        let response = request.await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["error"], false);
        assert!(body["totalItems"].as_u64().unwrap() > 0);
    }
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_full_text_filter_ignores_punctuation() {
    let app = create_test_app().await;
    app.openkj(json!({
        "command": "addSongs",
        "songs": [{ "artist": "AC/DC", "title": "Back in Black" }]
    }))
    .await;

    for artist in ["ac dc", "AC/DC"] {
        let body = app
            .server
            .get("/api/songs/search")
            .add_query_param("q", "back")
            .add_query_param("artist", artist)
            .await
            .json::<Value>();
        assert_eq!(body["totalItems"], 1, "artist filter {:?}", artist);
    }
}
