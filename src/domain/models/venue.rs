// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// 场馆实体
///
/// 一个可以接收点歌请求的卡拉OK场所
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Venue {
    pub venue_id: i32,
    pub name: String,
    /// URL 友好名称，公开页面用它定位场馆
    pub url_name: Option<String>,
    /// 当前是否接受点歌
    pub accepting: bool,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Venue {
    /// 场馆坐标，两者都存在时返回
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

/// 场馆查询条件
#[derive(Debug, Clone, Default)]
pub struct VenueFilter {
    pub venue_id: Option<i32>,
    pub url_name: Option<String>,
}

/// 公开接口返回的场馆视图，不含时间戳
#[derive(Debug, Clone, Serialize)]
pub struct PublicVenue {
    pub venue_id: i32,
    pub name: String,
    pub url_name: Option<String>,
    pub accepting: bool,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    /// 距查询点的公里数，仅在地理过滤时出现
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl From<Venue> for PublicVenue {
    fn from(venue: Venue) -> Self {
        Self {
            venue_id: venue.venue_id,
            name: venue.name,
            url_name: venue.url_name,
            accepting: venue.accepting,
            address1: venue.address1,
            address2: venue.address2,
            city: venue.city,
            state: venue.state,
            zip: venue.zip,
            lat: venue.lat,
            lon: venue.lon,
            distance: None,
        }
    }
}
