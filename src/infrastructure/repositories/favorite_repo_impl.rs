// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::favorite::{Favorite, FavoriteSong};
use crate::domain::repositories::favorite_repository::FavoriteRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::{favorite, song};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;
use std::sync::Arc;

/// 收藏仓库实现
#[derive(Clone)]
pub struct FavoriteRepoImpl {
    db: Arc<DatabaseConnection>,
}

impl FavoriteRepoImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find(&self, patron_id: i32, song_id: i32) -> Result<Option<Favorite>, RepositoryError> {
        let model = favorite::Entity::find_by_id((patron_id, song_id))
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }
}

#[async_trait]
impl FavoriteRepository for FavoriteRepoImpl {
    async fn list_for_patron(&self, patron_id: i32) -> Result<Vec<FavoriteSong>, RepositoryError> {
        let rows = favorite::Entity::find()
            .filter(favorite::Column::PatronId.eq(patron_id))
            .find_also_related(song::Entity)
            .order_by_desc(favorite::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(fav, song)| {
                song.map(|song| FavoriteSong {
                    song_id: song.song_id,
                    artist: song.artist,
                    title: song.title,
                    favorited_at: fav.created_at,
                })
            })
            .collect())
    }

    async fn add(&self, patron_id: i32, song_id: i32) -> Result<(Favorite, bool), RepositoryError> {
        if let Some(existing) = self.find(patron_id, song_id).await? {
            return Ok((existing, false));
        }

        let model = favorite::ActiveModel {
            patron_id: Set(patron_id),
            song_id: Set(song_id),
            created_at: Set(Utc::now()),
        };
        match model.insert(self.db.as_ref()).await {
            Ok(created) => Ok((created.into(), true)),
            Err(err) => match RepositoryError::from_write(err) {
                // lost a race with a concurrent insert of the same pair
                RepositoryError::Conflict(detail) => self
                    .find(patron_id, song_id)
                    .await?
                    .map(|existing| (existing, false))
                    .ok_or(RepositoryError::Conflict(detail)),
                other => Err(other),
            },
        }
    }

    async fn remove(&self, patron_id: i32, song_id: i32) -> Result<bool, RepositoryError> {
        let result = favorite::Entity::delete_many()
            .filter(favorite::Column::PatronId.eq(patron_id))
            .filter(favorite::Column::SongId.eq(song_id))
            .exec(self.db.as_ref())
            .await?;
        Ok(result.rows_affected > 0)
    }
}

impl From<favorite::Model> for Favorite {
    fn from(model: favorite::Model) -> Self {
        Self {
            patron_id: model.patron_id,
            song_id: model.song_id,
            created_at: model.created_at,
        }
    }
}
