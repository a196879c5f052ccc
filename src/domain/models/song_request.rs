// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// 点歌请求实体
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongRequest {
    pub request_id: i32,
    pub venue_id: i32,
    pub artist: String,
    pub title: String,
    pub singer: String,
    pub request_time: DateTime<Utc>,
    /// 升降调半音数
    pub key_change: i32,
}

/// 新点歌请求
#[derive(Debug, Clone, PartialEq)]
pub struct NewSongRequest {
    pub venue_id: i32,
    pub artist: String,
    pub title: String,
    pub singer: String,
    pub key_change: i32,
}
