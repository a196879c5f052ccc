// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::venue::{Venue, VenueFilter};
use async_trait::async_trait;

/// 场馆仓库特质
#[async_trait]
pub trait VenueRepository: Send + Sync {
    /// 根据ID查找场馆
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(Venue))` - 找到场馆
    /// * `Ok(None)` - 场馆不存在
    /// * `Err(RepositoryError)` - 查询失败
    async fn find_by_id(&self, venue_id: i32) -> Result<Option<Venue>, RepositoryError>;

    /// 按名称排序列出符合条件的场馆
    async fn list(&self, filter: &VenueFilter) -> Result<Vec<Venue>, RepositoryError>;

    /// 设置场馆是否接受点歌
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(Venue))` - 更新后的场馆
    /// * `Ok(None)` - 场馆不存在
    async fn set_accepting(
        &self,
        venue_id: i32,
        accepting: bool,
    ) -> Result<Option<Venue>, RepositoryError>;

    /// 场馆总数
    async fn count(&self) -> Result<u64, RepositoryError>;
}
