// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::song_request::{NewSongRequest, SongRequest};
use crate::domain::repositories::song_request_repository::SongRequestRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::song_request;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;
use std::sync::Arc;

/// 点歌请求仓库实现
#[derive(Clone)]
pub struct SongRequestRepoImpl {
    db: Arc<DatabaseConnection>,
}

impl SongRequestRepoImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SongRequestRepository for SongRequestRepoImpl {
    async fn create(&self, request: NewSongRequest) -> Result<SongRequest, RepositoryError> {
        let model = song_request::ActiveModel {
            venue_id: Set(request.venue_id),
            artist: Set(request.artist),
            title: Set(request.title),
            singer: Set(request.singer),
            request_time: Set(Utc::now()),
            key_change: Set(request.key_change),
            ..Default::default()
        };

        let created = model
            .insert(self.db.as_ref())
            .await
            .map_err(RepositoryError::from_write)?;
        Ok(created.into())
    }

    async fn list_for_venue(&self, venue_id: i32) -> Result<Vec<SongRequest>, RepositoryError> {
        let models = song_request::Entity::find()
            .filter(song_request::Column::VenueId.eq(venue_id))
            .order_by_asc(song_request::Column::RequestTime)
            .order_by_asc(song_request::Column::RequestId)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn delete_in_venue(
        &self,
        request_id: i32,
        venue_id: i32,
    ) -> Result<bool, RepositoryError> {
        let result = song_request::Entity::delete_many()
            .filter(song_request::Column::RequestId.eq(request_id))
            .filter(song_request::Column::VenueId.eq(venue_id))
            .exec(self.db.as_ref())
            .await?;
        Ok(result.rows_affected > 0)
    }

    async fn clear_venue(&self, venue_id: i32) -> Result<u64, RepositoryError> {
        let result = song_request::Entity::delete_many()
            .filter(song_request::Column::VenueId.eq(venue_id))
            .exec(self.db.as_ref())
            .await?;
        Ok(result.rows_affected)
    }
}

impl From<song_request::Model> for SongRequest {
    fn from(model: song_request::Model) -> Self {
        Self {
            request_id: model.request_id,
            venue_id: model.venue_id,
            artist: model.artist,
            title: model.title,
            singer: model.singer,
            request_time: model.request_time,
            key_change: model.key_change,
        }
    }
}
