// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::pagination::PageRequest;
use crate::domain::models::song::{FieldQuery, FullTextQuery, NewSong, Song};
use async_trait::async_trait;

/// 歌曲库仓库特质
#[async_trait]
pub trait SongRepository: Send + Sync {
    async fn find_by_id(&self, song_id: i32) -> Result<Option<Song>, RepositoryError>;

    /// 全文检索，按与第一个查询的相关度降序
    ///
    /// # 返回值
    ///
    /// * `Ok((Vec<Song>, u64))` - 当前页歌曲与匹配总数
    async fn search_full_text(
        &self,
        query: &FullTextQuery,
        page: PageRequest,
    ) -> Result<(Vec<Song>, u64), RepositoryError>;

    /// 按歌手、歌名子串检索，按歌手、歌名排序
    async fn search_by_fields(
        &self,
        query: &FieldQuery,
        page: PageRequest,
    ) -> Result<(Vec<Song>, u64), RepositoryError>;

    /// 去重后按字母序列出歌手
    async fn list_artists(&self, page: PageRequest) -> Result<(Vec<String>, u64), RepositoryError>;

    /// 批量写入歌曲，`combined` 重复的条目被忽略
    ///
    /// # 返回值
    ///
    /// * `Ok(u64)` - 实际写入的条数
    async fn insert_ignoring_duplicates(&self, songs: &[NewSong]) -> Result<u64, RepositoryError>;

    /// 清空歌曲库（收藏随之级联删除）
    async fn clear_all(&self) -> Result<u64, RepositoryError>;
}
