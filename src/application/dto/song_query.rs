// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::lenient_u64;
use crate::domain::models::pagination::{PageRequest, Paged};
use crate::domain::models::song::Song;
use crate::domain::services::song_service::SongSearch;
use serde::{Deserialize, Serialize};

/// 歌曲检索默认页大小
pub const DEFAULT_SONG_PAGE_SIZE: u64 = 20;
/// 歌手列表默认页大小
pub const DEFAULT_ARTIST_PAGE_SIZE: u64 = 100;

/// 分页查询参数，无法解析的值按缺省处理
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub size: Option<String>,
}

impl PageQuery {
    pub fn to_page_request(&self, default_size: u64) -> PageRequest {
        PageRequest::new(
            lenient_u64(self.page.as_deref()),
            lenient_u64(self.size.as_deref()),
            default_size,
        )
    }
}

/// `GET /api/songs/search` 查询参数
#[derive(Debug, Default, Deserialize)]
pub struct SongSearchQuery {
    pub q: Option<String>,
    pub artist: Option<String>,
    pub title: Option<String>,
    #[serde(flatten)]
    pub page: PageQuery,
}

impl From<SongSearchQuery> for SongSearch {
    fn from(query: SongSearchQuery) -> Self {
        Self {
            page: query.page.to_page_request(DEFAULT_SONG_PAGE_SIZE),
            q: query.q,
            artist: query.artist,
            title: query.title,
        }
    }
}

/// 歌曲检索响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongPageDto {
    pub error: bool,
    pub total_items: u64,
    pub songs: Vec<Song>,
    pub total_pages: u64,
    pub current_page: u64,
}

impl From<Paged<Song>> for SongPageDto {
    fn from(page: Paged<Song>) -> Self {
        Self {
            error: false,
            total_items: page.total,
            total_pages: page.total_pages(),
            current_page: page.page,
            songs: page.items,
        }
    }
}

/// 歌手列表响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistPageDto {
    pub error: bool,
    pub total_items: u64,
    pub artists: Vec<String>,
    pub total_pages: u64,
    pub current_page: u64,
}

impl From<Paged<String>> for ArtistPageDto {
    fn from(page: Paged<String>) -> Self {
        Self {
            error: false,
            total_items: page.total,
            total_pages: page.total_pages(),
            current_page: page.page,
            artists: page.items,
        }
    }
}
