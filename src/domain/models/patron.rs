// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// 点歌顾客
///
/// 未注册顾客没有邮箱和密码，只有注册顾客可以登录并收藏歌曲
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Patron {
    pub patron_id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub mobile_number: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPatron {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub mobile_number: Option<String>,
    pub password_hash: String,
}
