// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::patron::Patron;
use crate::domain::services::auth_service::AuthService;
use crate::presentation::errors::AppError;
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::debug;

/// 通过认证的顾客，由中间件注入请求扩展
#[derive(Debug, Clone)]
pub struct AuthenticatedPatron(pub Patron);

/// 提取 `Authorization: Bearer <token>` 中的令牌
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// 顾客认证中间件
///
/// 校验 Bearer 令牌并加载顾客，失败时直接返回 401
///
/// # 参数
///
/// * `auth` - 认证服务
/// * `req` - HTTP请求
/// * `next` - 下一个中间件
pub async fn patron_auth_middleware(
    State(auth): State<Arc<AuthService>>,
    mut req: Request,
    next: Next,
) -> Response {
    let token = bearer_token(req.headers()).map(str::to_string);
    match auth.authenticate_patron(token.as_deref()).await {
        Ok(patron) => {
            debug!(patron_id = patron.patron_id, "Patron token validated");
            req.extensions_mut().insert(AuthenticatedPatron(patron));
            next.run(req).await
        }
        Err(err) => AppError::from(err).into_response(),
    }
}
