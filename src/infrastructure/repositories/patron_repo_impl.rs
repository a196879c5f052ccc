// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::patron::{NewPatron, Patron};
use crate::domain::repositories::patron_repository::PatronRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::patron;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;
use std::sync::Arc;

/// 顾客仓库实现
#[derive(Clone)]
pub struct PatronRepoImpl {
    db: Arc<DatabaseConnection>,
}

impl PatronRepoImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PatronRepository for PatronRepoImpl {
    async fn find_by_id(&self, patron_id: i32) -> Result<Option<Patron>, RepositoryError> {
        let model = patron::Entity::find_by_id(patron_id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Patron>, RepositoryError> {
        let model = patron::Entity::find()
            .filter(patron::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn create(&self, new_patron: NewPatron) -> Result<Patron, RepositoryError> {
        let now = Utc::now();
        let model = patron::ActiveModel {
            first_name: Set(new_patron.first_name),
            last_name: Set(new_patron.last_name),
            email: Set(Some(new_patron.email)),
            mobile_number: Set(new_patron.mobile_number),
            password_hash: Set(Some(new_patron.password_hash)),
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

impl From<patron::Model> for Patron {
    fn from(model: patron::Model) -> Self {
        Self {
            patron_id: model.patron_id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            mobile_number: model.mobile_number,
            password_hash: model.password_hash,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
