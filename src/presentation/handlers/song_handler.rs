// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::song_query::{
    ArtistPageDto, PageQuery, SongPageDto, SongSearchQuery, DEFAULT_ARTIST_PAGE_SIZE,
};
use crate::domain::services::song_service::SongService;
use crate::domain::services::ServiceError;
use crate::presentation::errors::AppError;
use axum::{
    extract::{Extension, Path, Query},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

/// 检索歌曲
pub async fn search_songs(
    Extension(songs): Extension<Arc<SongService>>,
    Query(query): Query<SongSearchQuery>,
) -> Result<Json<SongPageDto>, AppError> {
    let page = songs.search(query.into()).await?;
    Ok(Json(page.into()))
}

/// 按字母序列出歌手
pub async fn list_artists(
    Extension(songs): Extension<Arc<SongService>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ArtistPageDto>, AppError> {
    let page = songs
        .artists(query.to_page_request(DEFAULT_ARTIST_PAGE_SIZE))
        .await?;
    Ok(Json(page.into()))
}

/// 获取单曲
pub async fn get_song(
    Extension(songs): Extension<Arc<SongService>>,
    Path(song_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let song_id = song_id
        .trim()
        .parse::<i32>()
        .map_err(|_| ServiceError::NotFound("Song not found.".to_string()))?;
    let song = songs.get(song_id).await?;
    Ok(Json(json!({ "error": false, "song": song })))
}
