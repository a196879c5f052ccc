// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;

/// 歌曲库条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Song {
    pub song_id: i32,
    pub artist: String,
    pub title: String,
    /// `"{artist} - {title}"`，全局唯一
    pub combined: String,
}

/// 待写入歌曲库的新歌曲
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSong {
    pub artist: String,
    pub title: String,
    pub combined: String,
}

impl NewSong {
    /// 由已去除首尾空白的歌手与歌名构造
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        let artist = artist.into();
        let title = title.into();
        let combined = format!("{} - {}", artist, title);
        Self {
            artist,
            title,
            combined,
        }
    }
}

/// 全文检索条件
///
/// `tsqueries` 中任意一个匹配即可，`artist` / `title` 为附加的子串过滤
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FullTextQuery {
    pub tsqueries: Vec<String>,
    pub artist: Option<String>,
    pub title: Option<String>,
}

/// 字段检索条件，均为大小写不敏感的子串匹配
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldQuery {
    pub artist: Option<String>,
    pub title: Option<String>,
}
