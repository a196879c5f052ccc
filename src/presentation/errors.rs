// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::domain::repositories::RepositoryError;
use crate::domain::services::ServiceError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，统一以 `{error: true, errorString}` 返回
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    fn status_and_message(&self) -> (StatusCode, String) {
        if let Some(err) = self.0.downcast_ref::<ServiceError>() {
            let status = match err {
                ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
                ServiceError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
                ServiceError::Forbidden(_) => StatusCode::FORBIDDEN,
                ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
                ServiceError::Conflict(_) => StatusCode::CONFLICT,
                ServiceError::Internal { message, source } => {
                    error!(error = %source, "{}", message);
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            return (status, err.to_string());
        }

        if let Some(err) = self.0.downcast_ref::<RepositoryError>() {
            return match err {
                RepositoryError::NotFound => (StatusCode::NOT_FOUND, err.to_string()),
                RepositoryError::Conflict(_) => (StatusCode::CONFLICT, err.to_string()),
                RepositoryError::InvalidReference(_) => (StatusCode::BAD_REQUEST, err.to_string()),
                RepositoryError::Database(db_err) => {
                    error!(error = %db_err, "Unhandled database error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error.".to_string(),
                    )
                }
            };
        }

        if let Some(rejection) = self.0.downcast_ref::<JsonRejection>() {
            return (StatusCode::BAD_REQUEST, rejection.body_text());
        }
        if let Some(rejection) = self.0.downcast_ref::<QueryRejection>() {
            return (StatusCode::BAD_REQUEST, rejection.body_text());
        }
        if let Some(rejection) = self.0.downcast_ref::<PathRejection>() {
            return (StatusCode::BAD_REQUEST, rejection.body_text());
        }

        error!(error = ?self.0, "Unhandled application error");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error.".to_string(),
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        let body = Json(json!({ "error": true, "errorString": message }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
