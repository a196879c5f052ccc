// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::venue::{PublicVenue, VenueFilter};
use crate::domain::repositories::venue_repository::VenueRepository;
use crate::domain::services::ServiceError;
use crate::utils::geo::haversine_km;
use std::sync::Arc;

/// 公开场馆查询条件，原样来自查询字符串
#[derive(Debug, Clone, Default)]
pub struct VenueQuery {
    pub id: Option<String>,
    pub url_name: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub distance: Option<String>,
}

/// 宽松解析浮点数，取字符串开头最长的合法数字前缀
///
/// `"12.5km"` 解析为 12.5，没有数字前缀时返回 `None`
pub fn parse_leading_float(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let mut best = None;
    for (idx, ch) in trimmed.char_indices() {
        if !(ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'e' | 'E')) {
            break;
        }
        let end = idx + ch.len_utf8();
        if let Ok(value) = trimmed[..end].parse::<f64>() {
            best = Some(value);
        }
    }
    best.filter(|v| v.is_finite())
}

/// 公开场馆服务
pub struct VenueService {
    venues: Arc<dyn VenueRepository>,
}

impl VenueService {
    pub fn new(venues: Arc<dyn VenueRepository>) -> Self {
        Self { venues }
    }

    /// 列出公开场馆
    ///
    /// 经纬度和距离都能解析时，只返回范围内有坐标的场馆，并按距离升序排列
    pub async fn list_public(&self, query: VenueQuery) -> Result<Vec<PublicVenue>, ServiceError> {
        let id = query.id.as_deref().map(str::trim).filter(|v| !v.is_empty());
        let venue_id = match id {
            Some(raw) => match raw.parse::<i32>() {
                Ok(id) => Some(id),
                // no venue can carry a non-numeric id
                Err(_) => return Ok(Vec::new()),
            },
            None => None,
        };

        let filter = VenueFilter {
            venue_id,
            url_name: query.url_name.filter(|u| !u.is_empty()),
        };
        let venues = self
            .venues
            .list(&filter)
            .await
            .map_err(|e| ServiceError::internal("Error retrieving venues.", e))?;

        let origin = (
            query.lat.as_deref().and_then(parse_leading_float),
            query.lon.as_deref().and_then(parse_leading_float),
            query.distance.as_deref().and_then(parse_leading_float),
        );
        let (Some(lat), Some(lon), Some(radius)) = origin else {
            return Ok(venues.into_iter().map(PublicVenue::from).collect());
        };

        let mut nearby: Vec<PublicVenue> = venues
            .into_iter()
            .filter_map(|venue| {
                let (venue_lat, venue_lon) = venue.coordinates()?;
                let distance = haversine_km(lat, lon, venue_lat, venue_lon);
                if distance > radius {
                    return None;
                }
                let mut public = PublicVenue::from(venue);
                public.distance = Some(distance);
                Some(public)
            })
            .collect();
        nearby.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(nearby)
    }
}
