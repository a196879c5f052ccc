// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::favorite::{Favorite, FavoriteSong};
use crate::domain::models::loose_id::LooseId;
use crate::domain::repositories::favorite_repository::FavoriteRepository;
use crate::domain::repositories::song_repository::SongRepository;
use crate::domain::repositories::RepositoryError;
use crate::domain::services::ServiceError;
use std::sync::Arc;
use tracing::{debug, info};

/// 添加收藏的结果
#[derive(Debug, Clone, PartialEq)]
pub enum FavoriteOutcome {
    Added(Favorite),
    AlreadyPresent(Favorite),
}

/// 收藏服务
pub struct FavoriteService {
    favorites: Arc<dyn FavoriteRepository>,
    songs: Arc<dyn SongRepository>,
}

impl FavoriteService {
    pub fn new(favorites: Arc<dyn FavoriteRepository>, songs: Arc<dyn SongRepository>) -> Self {
        Self { favorites, songs }
    }

    /// 按收藏时间倒序列出顾客的收藏
    pub async fn list(&self, patron_id: i32) -> Result<Vec<FavoriteSong>, ServiceError> {
        let favorites = self
            .favorites
            .list_for_patron(patron_id)
            .await
            .map_err(|e| ServiceError::internal("Error retrieving favorites.", e))?;
        debug!(patron_id, count = favorites.len(), "Listed favorites");
        Ok(favorites)
    }

    /// 添加收藏，重复添加返回已有记录
    pub async fn add(&self, patron_id: i32, song_id: LooseId) -> Result<FavoriteOutcome, ServiceError> {
        const FAILURE: &str = "Error adding favorite.";

        let song_id = match song_id {
            LooseId::Missing => {
                return Err(ServiceError::BadRequest("Song ID is required.".to_string()))
            }
            LooseId::Invalid(raw) => {
                return Err(ServiceError::NotFound(format!(
                    "Song with ID {} not found.",
                    raw
                )))
            }
            LooseId::Id(id) => id,
        };

        let song = self
            .songs
            .find_by_id(song_id)
            .await
            .map_err(|e| ServiceError::internal(FAILURE, e))?;
        if song.is_none() {
            return Err(ServiceError::NotFound(format!(
                "Song with ID {} not found.",
                song_id
            )));
        }

        match self.favorites.add(patron_id, song_id).await {
            Ok((favorite, true)) => {
                info!(patron_id, song_id, "Song added to favorites");
                Ok(FavoriteOutcome::Added(favorite))
            }
            Ok((favorite, false)) => Ok(FavoriteOutcome::AlreadyPresent(favorite)),
            Err(RepositoryError::InvalidReference(_)) => Err(ServiceError::BadRequest(
                "Invalid Patron or Song ID provided.".to_string(),
            )),
            Err(e) => Err(ServiceError::internal(FAILURE, e)),
        }
    }

    /// 删除收藏
    ///
    /// `song_id` 来自路径参数，不是整数时按收藏不存在处理
    pub async fn remove(&self, patron_id: i32, song_id: &str) -> Result<(), ServiceError> {
        let not_found =
            || ServiceError::NotFound("Favorite not found for this user and song.".to_string());

        let Ok(song_id) = song_id.trim().parse::<i32>() else {
            return Err(not_found());
        };

        let removed = self
            .favorites
            .remove(patron_id, song_id)
            .await
            .map_err(|e| ServiceError::internal("Error removing favorite.", e))?;
        if !removed {
            return Err(not_found());
        }
        info!(patron_id, song_id, "Song removed from favorites");
        Ok(())
    }
}
