// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::api_key::{ApiKey, NewApiKey};
use crate::domain::repositories::api_key_repository::ApiKeyRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::api_key;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::*;
use std::sync::Arc;

/// API 密钥仓库实现
#[derive(Clone)]
pub struct ApiKeyRepoImpl {
    db: Arc<DatabaseConnection>,
}

impl ApiKeyRepoImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ApiKeyRepository for ApiKeyRepoImpl {
    async fn find_by_key(&self, key: &str) -> Result<Option<ApiKey>, RepositoryError> {
        let model = api_key::Entity::find()
            .filter(api_key::Column::Key.eq(key))
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn touch_last_used(&self, api_key_id: i32) -> Result<(), RepositoryError> {
        api_key::Entity::update_many()
            .col_expr(api_key::Column::LastUsedAt, Expr::value(Utc::now()))
            .filter(api_key::Column::ApiKeyId.eq(api_key_id))
            .exec(self.db.as_ref())
            .await?;
        Ok(())
    }

    async fn create(&self, new_key: NewApiKey) -> Result<ApiKey, RepositoryError> {
        let now = Utc::now();
        let model = api_key::ActiveModel {
            key: Set(new_key.key),
            user_id: Set(new_key.user_id),
            description: Set(new_key.description),
            last_used_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let created = model
            .insert(self.db.as_ref())
            .await
            .map_err(RepositoryError::from_write)?;
        Ok(created.into())
    }
}

impl From<api_key::Model> for ApiKey {
    fn from(model: api_key::Model) -> Self {
        Self {
            api_key_id: model.api_key_id,
            key: model.key,
            user_id: model.user_id,
            description: model.description,
            last_used_at: model.last_used_at,
            created_at: model.created_at,
        }
    }
}
