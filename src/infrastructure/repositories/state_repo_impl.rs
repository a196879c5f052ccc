// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::state_repository::StateRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::state;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

const STATE_ROW_ID: i32 = 1;

/// 全局状态仓库实现
#[derive(Clone)]
pub struct StateRepoImpl {
    db: Arc<DatabaseConnection>,
}

impl StateRepoImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StateRepository for StateRepoImpl {
    async fn ensure_row(&self) -> Result<bool, RepositoryError> {
        let result = self
            .db
            .execute(Statement::from_sql_and_values(
                DbBackend::Postgres,
                "INSERT INTO state (id, serial, accepting) VALUES ($1, 0, false) \
                 ON CONFLICT (id) DO NOTHING",
                [STATE_ROW_ID.into()],
            ))
            .await?;
        Ok(result.rows_affected() == 1)
    }

    async fn serial(&self) -> Result<Option<i32>, RepositoryError> {
        let model = state::Entity::find_by_id(STATE_ROW_ID)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(|m| m.serial))
    }

    async fn increment_serial(&self) -> Result<Option<i32>, RepositoryError> {
        let row = self
            .db
            .query_one(Statement::from_sql_and_values(
                DbBackend::Postgres,
                "UPDATE state SET serial = serial + 1 WHERE id = $1 RETURNING serial",
                [STATE_ROW_ID.into()],
            ))
            .await?;
        match row {
            Some(row) => Ok(Some(row.try_get::<i32>("", "serial")?)),
            None => Ok(None),
        }
    }
}
