// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::loose_id::LooseId;
use crate::domain::models::song_request::{NewSongRequest, SongRequest};
use crate::domain::repositories::song_request_repository::SongRequestRepository;
use crate::domain::repositories::venue_repository::VenueRepository;
use crate::domain::services::serial_counter::SerialCounter;
use crate::domain::services::ServiceError;
use std::sync::Arc;
use tracing::info;

/// 顾客提交的点歌请求
#[derive(Debug, Clone, Default)]
pub struct SubmitRequest {
    pub venue_id: LooseId,
    pub artist: Option<String>,
    pub title: Option<String>,
    pub singer_name: Option<String>,
    pub key_change: i32,
}

/// 点歌服务
pub struct RequestService {
    venues: Arc<dyn VenueRepository>,
    requests: Arc<dyn SongRequestRepository>,
    serial: SerialCounter,
}

fn required(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl RequestService {
    pub fn new(
        venues: Arc<dyn VenueRepository>,
        requests: Arc<dyn SongRequestRepository>,
        serial: SerialCounter,
    ) -> Self {
        Self {
            venues,
            requests,
            serial,
        }
    }

    /// 提交点歌请求
    ///
    /// 场馆必须存在且正在接受点歌；成功后推进全局序列号
    pub async fn submit(&self, submission: SubmitRequest) -> Result<SongRequest, ServiceError> {
        let (Some(artist), Some(title), Some(singer)) = (
            required(&submission.artist),
            required(&submission.title),
            required(&submission.singer_name),
        ) else {
            return Err(ServiceError::BadRequest(
                "Venue ID, artist, title, and singer name are required.".to_string(),
            ));
        };

        let venue_id = match &submission.venue_id {
            LooseId::Missing => {
                return Err(ServiceError::BadRequest(
                    "Venue ID, artist, title, and singer name are required.".to_string(),
                ))
            }
            LooseId::Invalid(raw) => {
                return Err(ServiceError::NotFound(format!(
                    "Venue with ID {} not found.",
                    raw
                )))
            }
            LooseId::Id(id) => *id,
        };

        let venue = self
            .venues
            .find_by_id(venue_id)
            .await
            .map_err(|e| ServiceError::internal("Error submitting request.", e))?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Venue with ID {} not found.", venue_id))
            })?;

        if !venue.accepting {
            return Err(ServiceError::Forbidden(format!(
                "Venue \"{}\" is not currently accepting requests.",
                venue.name
            )));
        }

        let request = self
            .requests
            .create(NewSongRequest {
                venue_id,
                artist: artist.to_string(),
                title: title.to_string(),
                singer: singer.to_string(),
                key_change: submission.key_change,
            })
            .await
            .map_err(|e| ServiceError::internal("Error submitting request.", e))?;

        let serial = self.serial.advance().await;
        info!(
            venue_id,
            request_id = request.request_id,
            serial,
            "Song request submitted"
        );
        Ok(request)
    }
}
