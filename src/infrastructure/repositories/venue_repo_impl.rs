// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::venue::{Venue, VenueFilter};
use crate::domain::repositories::venue_repository::VenueRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::venue;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;
use std::sync::Arc;

/// 场馆仓库实现
#[derive(Clone)]
pub struct VenueRepoImpl {
    db: Arc<DatabaseConnection>,
}

impl VenueRepoImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VenueRepository for VenueRepoImpl {
    async fn find_by_id(&self, venue_id: i32) -> Result<Option<Venue>, RepositoryError> {
        let model = venue::Entity::find_by_id(venue_id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self, filter: &VenueFilter) -> Result<Vec<Venue>, RepositoryError> {
        let mut query = venue::Entity::find();
        if let Some(venue_id) = filter.venue_id {
            query = query.filter(venue::Column::VenueId.eq(venue_id));
        }
        if let Some(url_name) = &filter.url_name {
            query = query.filter(venue::Column::UrlName.eq(url_name.as_str()));
        }

        let models = query
            .order_by_asc(venue::Column::Name)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn set_accepting(
        &self,
        venue_id: i32,
        accepting: bool,
    ) -> Result<Option<Venue>, RepositoryError> {
        let Some(model) = venue::Entity::find_by_id(venue_id)
            .one(self.db.as_ref())
            .await?
        else {
            return Ok(None);
        };

        let mut active: venue::ActiveModel = model.into();
        active.accepting = Set(accepting);
        active.updated_at = Set(Utc::now());
        let updated = active.update(self.db.as_ref()).await?;
        Ok(Some(updated.into()))
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(venue::Entity::find().count(self.db.as_ref()).await?)
    }
}

impl From<venue::Model> for Venue {
    fn from(model: venue::Model) -> Self {
        Self {
            venue_id: model.venue_id,
            name: model.name,
            url_name: model.url_name,
            accepting: model.accepting,
            address1: model.address1,
            address2: model.address2,
            city: model.city,
            state: model.state,
            zip: model.zip,
            lat: model.lat,
            lon: model.lon,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
