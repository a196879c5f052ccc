// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// 顾客收藏关系
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Favorite {
    pub patron_id: i32,
    pub song_id: i32,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// 收藏列表中的歌曲
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FavoriteSong {
    pub song_id: i32,
    pub artist: String,
    pub title: String,
    pub favorited_at: DateTime<Utc>,
}
