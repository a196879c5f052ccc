// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::patron::Patron;
use crate::domain::models::user::User;
use crate::domain::services::auth_service::PatronRegistration;
use serde::{Deserialize, Serialize};

/// 管理员登录请求
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AdminLoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// 顾客注册请求
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PatronRegisterRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub mobile_number: Option<String>,
    pub password: Option<String>,
}

impl From<PatronRegisterRequest> for PatronRegistration {
    fn from(req: PatronRegisterRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            mobile_number: req.mobile_number,
            password: req.password,
        }
    }
}

/// 顾客登录请求
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PatronLoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// 管理员登录响应中的用户信息
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserDto {
    pub user_id: i32,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
}

impl From<&User> for AdminUserDto {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id,
            username: user.username.clone(),
            email: user.email.clone(),
            is_admin: user.is_admin,
        }
    }
}

/// 顾客登录响应中的顾客信息
#[derive(Debug, Serialize)]
pub struct PatronSummaryDto {
    #[serde(rename = "patronId")]
    pub patron_id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl From<&Patron> for PatronSummaryDto {
    fn from(patron: &Patron) -> Self {
        Self {
            patron_id: patron.patron_id,
            first_name: patron.first_name.clone(),
            last_name: patron.last_name.clone(),
            email: patron.email.clone(),
        }
    }
}
