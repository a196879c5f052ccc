// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use async_trait::async_trait;

/// 全局状态仓库特质
///
/// 状态表只有一行（`id = 1`），保存 OpenKJ 客户端轮询的序列号
#[async_trait]
pub trait StateRepository: Send + Sync {
    /// 确保状态行存在，返回是否新建
    async fn ensure_row(&self) -> Result<bool, RepositoryError>;

    /// 读取当前序列号，状态行不存在时返回 `None`
    async fn serial(&self) -> Result<Option<i32>, RepositoryError>;

    /// 原子地将序列号加一并返回新值，状态行不存在时返回 `None`
    async fn increment_serial(&self) -> Result<Option<i32>, RepositoryError>;
}
