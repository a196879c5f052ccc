// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::request_submission::SubmitRequestDto;
use crate::domain::services::request_service::RequestService;
use crate::presentation::errors::AppError;
use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

/// 顾客提交点歌请求
pub async fn submit_request(
    Extension(requests): Extension<Arc<RequestService>>,
    payload: Result<Json<SubmitRequestDto>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Json(dto) = payload?;
    let request = requests.submit(dto.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "error": false,
            "message": "Request submitted successfully!",
            "request": request,
        })),
    ))
}
