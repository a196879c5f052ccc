// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::venue_query::PublicVenueQuery;
use crate::domain::services::venue_service::VenueService;
use crate::presentation::errors::AppError;
use axum::{
    extract::{Extension, Query},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

/// 公开场馆列表
pub async fn list_public_venues(
    Extension(venues): Extension<Arc<VenueService>>,
    Query(query): Query<PublicVenueQuery>,
) -> Result<Json<Value>, AppError> {
    let venues = venues.list_public(query.into()).await?;
    debug!(count = venues.len(), "Public venue listing succeeded");
    Ok(Json(json!({ "error": false, "venues": venues })))
}
