// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::openkj::OpenKjPayload;
use crate::domain::services::openkj_service::OpenKjService;
use axum::{body::Bytes, extract::Extension, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::error;

/// OpenKJ 命令端点
///
/// 业务结果一律以 200 返回，只有认证阶段的数据库错误返回 500
pub async fn handle_command(
    Extension(openkj): Extension<Arc<OpenKjService>>,
    body: Bytes,
) -> impl IntoResponse {
    let payload = OpenKjPayload::from_body(&body);
    match openkj.dispatch(&payload).await {
        Ok(reply) => (StatusCode::OK, Json(reply)),
        Err(failure) => {
            error!(error = ?failure, "OpenKJ authentication failed with a server error");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(failure.body()))
        }
    }
}
