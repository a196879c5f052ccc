// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::lenient_i32;
use crate::domain::models::loose_id::LooseId;
use crate::domain::services::request_service::SubmitRequest;
use serde::Deserialize;
use serde_json::Value;

/// 顾客点歌请求体
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SubmitRequestDto {
    pub venue_id: Option<Value>,
    pub artist: Option<String>,
    pub title: Option<String>,
    pub singer_name: Option<String>,
    /// 数字或数字字符串，缺失或无法解析时为 0
    pub key_change: Option<Value>,
}

impl From<SubmitRequestDto> for SubmitRequest {
    fn from(dto: SubmitRequestDto) -> Self {
        Self {
            venue_id: LooseId::from_value(dto.venue_id.as_ref()),
            artist: dto.artist,
            title: dto.title,
            singer_name: dto.singer_name,
            key_change: lenient_i32(dto.key_change.as_ref()).unwrap_or(0),
        }
    }
}
