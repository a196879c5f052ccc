// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::loose_id::LooseId;
use serde::Deserialize;
use serde_json::Value;

/// 添加收藏请求，`song_id` 可以是数字或数字字符串
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddFavoriteRequest {
    pub song_id: Option<Value>,
}

impl AddFavoriteRequest {
    pub fn song_id(&self) -> LooseId {
        LooseId::from_value(self.song_id.as_ref())
    }
}
