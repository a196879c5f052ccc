// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::favorite::{Favorite, FavoriteSong};
use async_trait::async_trait;

/// 收藏仓库特质
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// 按收藏时间倒序列出顾客收藏的歌曲
    async fn list_for_patron(&self, patron_id: i32) -> Result<Vec<FavoriteSong>, RepositoryError>;

    /// 添加收藏，已存在时返回现有记录
    ///
    /// # 返回值
    ///
    /// * `Ok((Favorite, true))` - 新建的收藏
    /// * `Ok((Favorite, false))` - 已存在的收藏
    /// * `Err(RepositoryError::InvalidReference)` - 顾客或歌曲不存在
    async fn add(&self, patron_id: i32, song_id: i32) -> Result<(Favorite, bool), RepositoryError>;

    /// 删除收藏，返回是否存在
    async fn remove(&self, patron_id: i32, song_id: i32) -> Result<bool, RepositoryError>;
}
