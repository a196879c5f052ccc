// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::patron::{NewPatron, Patron};
use crate::domain::models::user::User;
use crate::domain::repositories::patron_repository::PatronRepository;
use crate::domain::repositories::user_repository::UserRepository;
use crate::domain::repositories::RepositoryError;
use crate::domain::services::ServiceError;
use crate::infrastructure::security::jwt::{TokenError, TokenService};
use crate::infrastructure::security::password::{hash_password_async, verify_password_async};
use std::sync::Arc;
use tracing::{info, warn};
use validator::ValidateEmail;

/// 顾客注册信息
#[derive(Debug, Clone, Default)]
pub struct PatronRegistration {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub mobile_number: Option<String>,
    pub password: Option<String>,
}

/// 登录成功后签发的令牌与账户
#[derive(Debug, Clone)]
pub struct Authenticated<T> {
    pub token: String,
    pub account: T,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// 认证服务
///
/// 负责管理员登录、顾客注册登录以及顾客令牌校验
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    patrons: Arc<dyn PatronRepository>,
    tokens: TokenService,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        patrons: Arc<dyn PatronRepository>,
        tokens: TokenService,
    ) -> Self {
        Self {
            users,
            patrons,
            tokens,
        }
    }

    /// 管理员登录
    ///
    /// # 参数
    ///
    /// * `username` - 用户名
    /// * `password` - 明文密码
    ///
    /// # 返回值
    ///
    /// * `Ok(Authenticated<User>)` - 签发的令牌与用户
    /// * `Err(ServiceError)` - 参数缺失、凭据错误或非管理员
    pub async fn admin_login(
        &self,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<Authenticated<User>, ServiceError> {
        const FAILURE: &str = "Internal server error during login.";

        let (Some(username), Some(password)) = (present(username), present(password)) else {
            return Err(ServiceError::BadRequest(
                "Username and password are required.".to_string(),
            ));
        };

        let Some(user) = self
            .users
            .find_by_username(&username)
            .await
            .map_err(|e| ServiceError::internal(FAILURE, e))?
        else {
            warn!(username = %username, "Admin login failed: user not found");
            return Err(ServiceError::Unauthorized("Invalid credentials.".to_string()));
        };

        let matches = verify_password_async(password, user.password_hash.clone())
            .await
            .map_err(|e| ServiceError::internal(FAILURE, e))?;
        if !matches {
            warn!(username = %username, "Admin login failed: password mismatch");
            return Err(ServiceError::Unauthorized("Invalid credentials.".to_string()));
        }

        if !user.is_admin {
            warn!(username = %username, "Login rejected: user is not an admin");
            return Err(ServiceError::Forbidden(
                "Access denied. Admin privileges required.".to_string(),
            ));
        }

        let token = self
            .tokens
            .issue_admin(user.user_id, &user.username, user.is_admin)
            .map_err(|e| ServiceError::internal(FAILURE, e))?;
        info!(user_id = user.user_id, "Admin user logged in");
        Ok(Authenticated {
            token,
            account: user,
        })
    }

    /// 注册顾客账户
    pub async fn register_patron(
        &self,
        registration: PatronRegistration,
    ) -> Result<Patron, ServiceError> {
        const FAILURE: &str = "Error during registration.";

        let email = present(registration.email).map(|e| e.trim().to_string());
        let (Some(email), Some(password)) = (email, present(registration.password)) else {
            return Err(ServiceError::BadRequest(
                "Email and password are required for registration.".to_string(),
            ));
        };
        if !email.validate_email() {
            return Err(ServiceError::BadRequest("Invalid email format.".to_string()));
        }

        let existing = self
            .patrons
            .find_by_email(&email)
            .await
            .map_err(|e| ServiceError::internal(FAILURE, e))?;
        if existing.is_some() {
            return Err(ServiceError::Conflict("Email already registered.".to_string()));
        }

        let password_hash = hash_password_async(password)
            .await
            .map_err(|e| ServiceError::internal(FAILURE, e))?;

        let patron = self
            .patrons
            .create(NewPatron {
                first_name: optional_text(registration.first_name),
                last_name: optional_text(registration.last_name),
                email,
                mobile_number: optional_text(registration.mobile_number),
                password_hash,
            })
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => ServiceError::Conflict(
                    "Email or mobile number already registered.".to_string(),
                ),
                other => ServiceError::internal(FAILURE, other),
            })?;

        info!(patron_id = patron.patron_id, "New patron registered");
        Ok(patron)
    }

    /// 顾客登录
    ///
    /// 未设置密码的顾客视为未注册
    pub async fn patron_login(
        &self,
        email: Option<String>,
        password: Option<String>,
    ) -> Result<Authenticated<Patron>, ServiceError> {
        const FAILURE: &str = "Internal server error during login.";

        let (Some(email), Some(password)) = (present(email), present(password)) else {
            return Err(ServiceError::BadRequest(
                "Email and password are required.".to_string(),
            ));
        };

        let patron = self
            .patrons
            .find_by_email(email.trim())
            .await
            .map_err(|e| ServiceError::internal(FAILURE, e))?;
        let Some((patron, password_hash)) =
            patron.and_then(|p| p.password_hash.clone().map(|hash| (p, hash)))
        else {
            warn!("Patron login failed: not found or not registered");
            return Err(ServiceError::Unauthorized(
                "Invalid credentials or user not registered.".to_string(),
            ));
        };

        let matches = verify_password_async(password, password_hash)
            .await
            .map_err(|e| ServiceError::internal(FAILURE, e))?;
        if !matches {
            warn!(patron_id = patron.patron_id, "Patron login failed: password mismatch");
            return Err(ServiceError::Unauthorized("Invalid credentials.".to_string()));
        }

        let token = self
            .tokens
            .issue_patron(patron.patron_id, patron.email.as_deref())
            .map_err(|e| ServiceError::internal(FAILURE, e))?;
        info!(patron_id = patron.patron_id, "Patron logged in");
        Ok(Authenticated {
            token,
            account: patron,
        })
    }

    /// 校验顾客 Bearer 令牌并加载顾客
    ///
    /// # 参数
    ///
    /// * `token` - `Authorization: Bearer` 中的令牌，缺失时为 `None`
    pub async fn authenticate_patron(&self, token: Option<&str>) -> Result<Patron, ServiceError> {
        let Some(token) = token.filter(|t| !t.is_empty()) else {
            return Err(ServiceError::Unauthorized(
                "Authentication required: No token provided.".to_string(),
            ));
        };

        let patron_id = match self.tokens.verify_patron(token) {
            Ok((patron_id, _)) => patron_id,
            Err(TokenError::Expired) => {
                return Err(ServiceError::Unauthorized(
                    "Authentication failed: Token expired.".to_string(),
                ))
            }
            Err(TokenError::WrongKind) => {
                warn!("Patron token rejected: missing patronId");
                return Err(ServiceError::Unauthorized(
                    "Authentication failed: Invalid token type.".to_string(),
                ));
            }
            Err(e) => {
                warn!(reason = %e, "Patron token rejected");
                return Err(ServiceError::Unauthorized(format!(
                    "Authentication failed: {}",
                    e
                )));
            }
        };

        self.patrons
            .find_by_id(patron_id)
            .await
            .map_err(|e| ServiceError::internal("Server error during authentication.", e))?
            .ok_or_else(|| {
                warn!(patron_id, "Patron from valid token not found");
                ServiceError::Unauthorized("Invalid token: Patron not found.".to_string())
            })
    }
}
