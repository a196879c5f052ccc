// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// 仓库层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录不存在
    #[error("Record not found")]
    NotFound,
    /// 违反唯一约束
    #[error("Conflict: {0}")]
    Conflict(String),
    /// 引用的记录不存在（外键约束）
    #[error("Invalid reference: {0}")]
    InvalidReference(String),
}

impl RepositoryError {
    /// 将写入时的约束冲突归类为 `Conflict` / `InvalidReference`
    pub fn from_write(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => RepositoryError::Conflict(detail),
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                RepositoryError::InvalidReference(detail)
            }
            _ => RepositoryError::Database(err),
        }
    }
}
