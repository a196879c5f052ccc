// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::api_key::{ApiKey, NewApiKey};
use async_trait::async_trait;

/// API 密钥仓库特质
#[async_trait]
pub trait ApiKeyRepository: Send + Sync {
    async fn find_by_key(&self, key: &str) -> Result<Option<ApiKey>, RepositoryError>;

    /// 记录密钥的最近使用时间
    async fn touch_last_used(&self, api_key_id: i32) -> Result<(), RepositoryError>;

    async fn create(&self, api_key: NewApiKey) -> Result<ApiKey, RepositoryError>;
}
