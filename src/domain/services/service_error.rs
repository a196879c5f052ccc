// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::error::Error as StdError;
use thiserror::Error;

/// 领域服务错误
///
/// 除 `Internal` 外，消息会原样返回给客户端
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    /// 内部错误，只向客户端返回 `message`，`source` 记入日志
    #[error("{message}")]
    Internal {
        message: &'static str,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl ServiceError {
    pub fn internal(message: &'static str, source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        ServiceError::Internal {
            message,
            source: source.into(),
        }
    }
}
