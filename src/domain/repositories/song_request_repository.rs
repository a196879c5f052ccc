// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::song_request::{NewSongRequest, SongRequest};
use async_trait::async_trait;

/// 点歌请求仓库特质
#[async_trait]
pub trait SongRequestRepository: Send + Sync {
    /// 创建点歌请求，`request_time` 取当前时间
    async fn create(&self, request: NewSongRequest) -> Result<SongRequest, RepositoryError>;

    /// 按请求时间升序列出场馆的点歌请求
    async fn list_for_venue(&self, venue_id: i32) -> Result<Vec<SongRequest>, RepositoryError>;

    /// 删除属于指定场馆的请求
    ///
    /// # 返回值
    ///
    /// * `Ok(true)` - 已删除
    /// * `Ok(false)` - 请求不存在或不属于该场馆
    async fn delete_in_venue(&self, request_id: i32, venue_id: i32)
        -> Result<bool, RepositoryError>;

    /// 清空场馆的全部请求，返回删除条数
    async fn clear_venue(&self, venue_id: i32) -> Result<u64, RepositoryError>;
}
