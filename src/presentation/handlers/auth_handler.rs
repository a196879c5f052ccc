// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::auth_request::{
    AdminLoginRequest, AdminUserDto, PatronLoginRequest, PatronRegisterRequest, PatronSummaryDto,
};
use crate::domain::services::auth_service::AuthService;
use crate::presentation::errors::AppError;
use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

/// 管理员登录
pub async fn admin_login(
    Extension(auth): Extension<Arc<AuthService>>,
    payload: Result<Json<AdminLoginRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(req) = payload?;
    let login = auth.admin_login(req.username, req.password).await?;
    Ok(Json(json!({
        "error": false,
        "message": "Login successful.",
        "token": login.token,
        "user": AdminUserDto::from(&login.account),
    })))
}

/// 顾客注册
pub async fn patron_register(
    Extension(auth): Extension<Arc<AuthService>>,
    payload: Result<Json<PatronRegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Json(req) = payload?;
    let patron = auth.register_patron(req.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "error": false, "patron": patron })),
    ))
}

/// 顾客登录
pub async fn patron_login(
    Extension(auth): Extension<Arc<AuthService>>,
    payload: Result<Json<PatronLoginRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(req) = payload?;
    let login = auth.patron_login(req.email, req.password).await?;
    Ok(Json(json!({
        "error": false,
        "message": "Login successful.",
        "token": login.token,
        "patron": PatronSummaryDto::from(&login.account),
    })))
}
