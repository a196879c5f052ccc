// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::patron::{NewPatron, Patron};
use async_trait::async_trait;

/// 顾客仓库特质
#[async_trait]
pub trait PatronRepository: Send + Sync {
    async fn find_by_id(&self, patron_id: i32) -> Result<Option<Patron>, RepositoryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Patron>, RepositoryError>;

    /// 创建注册顾客，邮箱或手机号重复时返回 `RepositoryError::Conflict`
    async fn create(&self, patron: NewPatron) -> Result<Patron, RepositoryError>;
}
