// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::pagination::{PageRequest, Paged};
use crate::domain::models::song::{FieldQuery, Song};
use crate::domain::repositories::song_repository::SongRepository;
use crate::domain::services::song_search::{field_filter, full_text_query};
use crate::domain::services::ServiceError;
use std::sync::Arc;

/// 歌曲检索参数
#[derive(Debug, Clone)]
pub struct SongSearch {
    pub q: Option<String>,
    pub artist: Option<String>,
    pub title: Option<String>,
    pub page: PageRequest,
}

/// 歌曲服务
///
/// 公开的歌曲库检索、歌手列表和单曲查询
pub struct SongService {
    songs: Arc<dyn SongRepository>,
}

impl SongService {
    pub fn new(songs: Arc<dyn SongRepository>) -> Self {
        Self { songs }
    }

    /// 检索歌曲
    ///
    /// 有可用的检索词时走全文检索，否则按歌手、歌名子串匹配
    pub async fn search(&self, search: SongSearch) -> Result<Paged<Song>, ServiceError> {
        let full_text = search
            .q
            .as_deref()
            .and_then(|q| full_text_query(q, search.artist.as_deref(), search.title.as_deref()));

        let result = match full_text {
            Some(query) => self.songs.search_full_text(&query, search.page).await,
            None => {
                let query = FieldQuery {
                    artist: field_filter(search.artist.as_deref()),
                    title: field_filter(search.title.as_deref()),
                };
                self.songs.search_by_fields(&query, search.page).await
            }
        };

        let (items, total) =
            result.map_err(|e| ServiceError::internal("Error searching songs.", e))?;
        Ok(Paged {
            items,
            total,
            page: search.page.page,
            size: search.page.size,
        })
    }

    /// 按字母序分页列出歌手
    pub async fn artists(&self, page: PageRequest) -> Result<Paged<String>, ServiceError> {
        let (items, total) = self
            .songs
            .list_artists(page)
            .await
            .map_err(|e| ServiceError::internal("Error retrieving artists.", e))?;
        Ok(Paged {
            items,
            total,
            page: page.page,
            size: page.size,
        })
    }

    pub async fn get(&self, song_id: i32) -> Result<Song, ServiceError> {
        self.songs
            .find_by_id(song_id)
            .await
            .map_err(|e| ServiceError::internal("Error retrieving song.", e))?
            .ok_or_else(|| ServiceError::NotFound("Song not found.".to_string()))
    }
}
