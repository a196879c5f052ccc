// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// 根路径
pub async fn root() -> &'static str {
    "Karaoke API is running!"
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回状态与当前时间
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "UP",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
