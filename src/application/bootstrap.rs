// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::services::Repositories;
use crate::config::settings::BootstrapSettings;
use crate::domain::models::api_key::{ApiKey, NewApiKey};
use crate::domain::models::user::NewUser;
use crate::domain::services::serial_counter::SerialCounter;
use crate::infrastructure::security::password::hash_password_async;
use anyhow::Context;
use tracing::{info, warn};

/// 启动引导的结果
#[derive(Debug, Default, PartialEq)]
pub struct BootstrapReport {
    /// 新建的管理员 ID
    pub admin_user_id: Option<i32>,
    /// 随机生成的 API 密钥，只在创建时返回一次
    pub generated_api_key: Option<String>,
}

/// 启动时的初始化
///
/// 确保全局状态行存在；用户表为空且配置了管理员账户时，创建管理员及其 API 密钥
pub async fn bootstrap(
    repos: &Repositories,
    settings: &BootstrapSettings,
) -> anyhow::Result<BootstrapReport> {
    SerialCounter::new(repos.state.clone())
        .ensure_row()
        .await
        .context("failed to ensure global state row")?;

    let (Some(username), Some(password)) = (
        settings.admin_username.as_deref().filter(|u| !u.is_empty()),
        settings.admin_password.as_deref().filter(|p| !p.is_empty()),
    ) else {
        return Ok(BootstrapReport::default());
    };

    let existing = repos
        .users
        .count()
        .await
        .context("failed to count users")?;
    if existing > 0 {
        info!(existing, "Users already present; skipping admin bootstrap");
        return Ok(BootstrapReport::default());
    }

    let password_hash = hash_password_async(password.to_string())
        .await
        .context("failed to hash bootstrap admin password")?;
    let email = settings
        .admin_email
        .clone()
        .unwrap_or_else(|| format!("{}@localhost", username));
    let admin = repos
        .users
        .create(NewUser {
            username: username.to_string(),
            password_hash,
            email,
            is_admin: true,
        })
        .await
        .context("failed to create bootstrap admin")?;

    let (key, generated) = match settings.api_key.clone().filter(|k| !k.is_empty()) {
        Some(key) => (key, false),
        None => (ApiKey::generate_key(), true),
    };
    let api_key = repos
        .api_keys
        .create(NewApiKey {
            key: key.clone(),
            user_id: admin.user_id,
            description: Some("Created at first start".to_string()),
        })
        .await
        .context("failed to create bootstrap API key")?;

    info!(
        user_id = admin.user_id,
        api_key_id = api_key.api_key_id,
        key = %ApiKey::redacted(&key),
        "Bootstrapped admin user and API key"
    );
    if generated {
        warn!("Generated a random API key for the bootstrap admin; it is shown only once");
    }

    Ok(BootstrapReport {
        admin_user_id: Some(admin.user_id),
        generated_api_key: generated.then_some(key),
    })
}
