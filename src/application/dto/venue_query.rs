// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::venue_service::VenueQuery;
use serde::Deserialize;

/// `GET /api/public/venues` 查询参数
#[derive(Debug, Default, Deserialize)]
pub struct PublicVenueQuery {
    pub id: Option<String>,
    pub url_name: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub distance: Option<String>,
}

impl From<PublicVenueQuery> for VenueQuery {
    fn from(query: PublicVenueQuery) -> Self {
        Self {
            id: query.id,
            url_name: query.url_name,
            lat: query.lat,
            lon: query.lon,
            distance: query.distance,
        }
    }
}
