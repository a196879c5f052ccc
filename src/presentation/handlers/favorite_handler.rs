// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::favorite_request::AddFavoriteRequest;
use crate::domain::services::favorite_service::{FavoriteOutcome, FavoriteService};
use crate::presentation::errors::AppError;
use crate::presentation::middleware::patron_auth_middleware::AuthenticatedPatron;
use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

/// 列出当前顾客的收藏
pub async fn list_favorites(
    Extension(favorites): Extension<Arc<FavoriteService>>,
    Extension(AuthenticatedPatron(patron)): Extension<AuthenticatedPatron>,
) -> Result<Json<Value>, AppError> {
    let list = favorites.list(patron.patron_id).await?;
    Ok(Json(json!({ "error": false, "favorites": list })))
}

/// 添加收藏
///
/// 新建返回 201，已存在返回 200
pub async fn add_favorite(
    Extension(favorites): Extension<Arc<FavoriteService>>,
    Extension(AuthenticatedPatron(patron)): Extension<AuthenticatedPatron>,
    payload: Result<Json<AddFavoriteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Json(req) = payload?;
    let outcome = favorites.add(patron.patron_id, req.song_id()).await?;
    let (status, message, favorite) = match outcome {
        FavoriteOutcome::Added(f) => (StatusCode::CREATED, "Song added to favorites.", f),
        FavoriteOutcome::AlreadyPresent(f) => (StatusCode::OK, "Song is already in favorites.", f),
    };
    Ok((
        status,
        Json(json!({ "error": false, "message": message, "favorite": favorite })),
    ))
}

/// 删除收藏
pub async fn remove_favorite(
    Extension(favorites): Extension<Arc<FavoriteService>>,
    Extension(AuthenticatedPatron(patron)): Extension<AuthenticatedPatron>,
    Path(song_id): Path<String>,
) -> Result<StatusCode, AppError> {
    favorites.remove(patron.patron_id, &song_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
