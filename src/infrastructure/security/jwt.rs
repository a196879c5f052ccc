// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// 后台管理员令牌载荷
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminClaims {
    pub user_id: i32,
    pub username: String,
    pub is_admin: bool,
    pub iat: i64,
    pub exp: i64,
}

/// 顾客令牌载荷
///
/// 管理员令牌同样能通过签名校验，因此 `patron_id` 缺失时视为令牌类型错误
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatronClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patron_id: Option<i32>,
    #[serde(default)]
    pub email: Option<String>,
    pub iat: i64,
    pub exp: i64,
}

/// 令牌错误
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    /// 签名、格式或声明不合法，附带原因
    #[error("{0}")]
    Invalid(String),
    #[error("invalid token type")]
    WrongKind,
    #[error("failed to sign token: {0}")]
    Encoding(jsonwebtoken::errors::Error),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        let reason = match err.kind() {
            ErrorKind::ExpiredSignature => return TokenError::Expired,
            ErrorKind::InvalidSignature => "invalid signature".to_string(),
            ErrorKind::InvalidToken
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => "jwt malformed".to_string(),
            ErrorKind::InvalidAlgorithm => "invalid algorithm".to_string(),
            ErrorKind::ImmatureSignature => "jwt not active".to_string(),
            ErrorKind::MissingRequiredClaim(claim) => format!("jwt missing {}", claim),
            _ => err.to_string(),
        };
        TokenError::Invalid(reason)
    }
}

/// HS256 令牌服务
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// 创建令牌服务
    ///
    /// # 参数
    ///
    /// * `secret` - 签名密钥
    /// * `ttl` - 令牌有效期
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    fn window(&self) -> (i64, i64) {
        let iat = Utc::now().timestamp();
        let ttl = i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX - iat);
        (iat, iat.saturating_add(ttl))
    }

    pub fn sign<C: Serialize>(&self, claims: &C) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(TokenError::Encoding)
    }

    pub fn issue_admin(&self, user_id: i32, username: &str, is_admin: bool) -> Result<String, TokenError> {
        let (iat, exp) = self.window();
        self.sign(&AdminClaims {
            user_id,
            username: username.to_string(),
            is_admin,
            iat,
            exp,
        })
    }

    pub fn issue_patron(&self, patron_id: i32, email: Option<&str>) -> Result<String, TokenError> {
        let (iat, exp) = self.window();
        self.sign(&PatronClaims {
            patron_id: Some(patron_id),
            email: email.map(str::to_string),
            iat,
            exp,
        })
    }

    /// 校验签名与有效期并解析载荷
    pub fn verify<C: DeserializeOwned>(&self, token: &str) -> Result<C, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        Ok(decode::<C>(token, &self.decoding, &validation)?.claims)
    }

    /// 校验顾客令牌，返回顾客 ID 和载荷
    pub fn verify_patron(&self, token: &str) -> Result<(i32, PatronClaims), TokenError> {
        let claims: PatronClaims = self.verify(token)?;
        match claims.patron_id {
            Some(id) if id > 0 => Ok((id, claims)),
            _ => Err(TokenError::WrongKind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret", Duration::from_secs(3600))
    }

    #[test]
    fn test_admin_token_claims() {
        let tokens = service();
        let token = tokens.issue_admin(7, "admin", true).unwrap();
        let claims: AdminClaims = tokens.verify(&token).unwrap();

        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.username, "admin");
        assert!(claims.is_admin);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_admin_claims_use_camel_case() {
        let value = serde_json::to_value(AdminClaims {
            user_id: 1,
            username: "a".to_string(),
            is_admin: false,
            iat: 0,
            exp: 1,
        })
        .unwrap();
        assert!(value.get("userId").is_some());
        assert!(value.get("isAdmin").is_some());
    }

    #[test]
    fn test_patron_token_round_trip() {
        let tokens = service();
        let token = tokens.issue_patron(12, Some("p@example.com")).unwrap();
        let (id, claims) = tokens.verify_patron(&token).unwrap();

        assert_eq!(id, 12);
        assert_eq!(claims.email.as_deref(), Some("p@example.com"));
    }

    #[test]
    fn test_admin_token_is_wrong_kind_for_patron() {
        let tokens = service();
        let token = tokens.issue_admin(1, "admin", true).unwrap();
        assert!(matches!(
            tokens.verify_patron(&token),
            Err(TokenError::WrongKind)
        ));
    }

    #[test]
    fn test_expired_token() {
        let tokens = service();
        let now = Utc::now().timestamp();
        let token = tokens
            .sign(&PatronClaims {
                patron_id: Some(1),
                email: None,
                iat: now - 7200,
                exp: now - 3600,
            })
            .unwrap();
        assert!(matches!(
            tokens.verify_patron(&token),
            Err(TokenError::Expired)
        ));
    }

    #[test]
    fn test_token_expires_without_grace_period() {
        let tokens = service();
        let now = Utc::now().timestamp();
        let token = tokens
            .sign(&PatronClaims {
                patron_id: Some(1),
                email: None,
                iat: now - 60,
                exp: now - 5,
            })
            .unwrap();
        assert!(matches!(
            tokens.verify_patron(&token),
            Err(TokenError::Expired)
        ));
    }

    #[test]
    fn test_foreign_signature_is_invalid() {
        let token = TokenService::new("other-secret", Duration::from_secs(60))
            .issue_patron(1, None)
            .unwrap();
        let err = service().verify_patron(&token).unwrap_err();
        assert_eq!(err.to_string(), "invalid signature");
    }

    #[test]
    fn test_garbage_is_malformed() {
        let err = service().verify_patron("not.a.jwt").unwrap_err();
        assert!(matches!(err, TokenError::Invalid(_)));
    }
}
