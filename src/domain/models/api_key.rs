// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};

/// OpenKJ 客户端使用的 API 密钥，归属于某个后台用户
#[derive(Debug, Clone, PartialEq)]
pub struct ApiKey {
    pub api_key_id: i32,
    pub key: String,
    pub user_id: i32,
    pub description: Option<String>,
    pub last_used_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl ApiKey {
    /// 生成新的密钥字符串：32 个随机字节的十六进制表示
    pub fn generate_key() -> String {
        let bytes: [u8; 32] = rand::random();
        hex::encode(bytes)
    }

    /// 日志中使用的密钥前缀
    pub fn redacted(key: &str) -> String {
        let prefix: String = key.chars().take(5).collect();
        format!("{}...", prefix)
    }
}

#[derive(Debug, Clone)]
pub struct NewApiKey {
    pub key: String,
    pub user_id: i32,
    pub description: Option<String>,
}
