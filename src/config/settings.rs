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

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// 应用程序配置设置
///
/// 包含服务器、数据库、认证、跨域、OpenKJ 和启动引导等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 数据库配置
    pub database: DatabaseSettings,
    /// 认证配置
    pub auth: AuthSettings,
    /// 跨域配置
    #[serde(default)]
    pub cors: CorsSettings,
    /// OpenKJ 配置
    #[serde(default)]
    pub openkj: OpenKjSettings,
    /// 启动引导配置
    #[serde(default)]
    pub bootstrap: BootstrapSettings,
}

/// 数据库配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// 数据库连接URL
    pub url: String,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 认证配置设置
#[derive(Clone, Deserialize)]
pub struct AuthSettings {
    /// JWT 签名密钥
    pub jwt_secret: String,
    /// 令牌有效期，humantime 格式（如 `90d`、`12h`）
    pub token_ttl: String,
}

impl std::fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSettings")
            .field("jwt_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

impl AuthSettings {
    /// 解析令牌有效期
    ///
    /// # 返回值
    ///
    /// * `Ok(Duration)` - 解析后的有效期
    /// * `Err(ConfigError)` - 格式无效或为零
    pub fn token_ttl(&self) -> Result<Duration, ConfigError> {
        let ttl = humantime::parse_duration(&self.token_ttl).map_err(|e| {
            ConfigError::Message(format!("auth.token_ttl '{}': {}", self.token_ttl, e))
        })?;
        if ttl.is_zero() {
            return Err(ConfigError::Message(
                "auth.token_ttl must be greater than zero".to_string(),
            ));
        }
        Ok(ttl)
    }
}

/// 跨域配置设置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsSettings {
    /// 允许的来源列表，为空时允许任意来源
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// OpenKJ 配置设置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenKjSettings {
    /// `getAlert` 返回的标题
    pub alert_title: Option<String>,
    /// `getAlert` 返回的消息，为空时不提示
    pub alert_message: Option<String>,
}

/// 启动引导配置设置
///
/// 用户表为空时，按此配置创建首个管理员及其 API 密钥
#[derive(Clone, Default, Deserialize)]
pub struct BootstrapSettings {
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
    pub admin_email: Option<String>,
    /// 预设的 API 密钥，未设置时随机生成
    pub api_key: Option<String>,
}

impl std::fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("admin_username", &self.admin_username)
            .field("admin_email", &self.admin_email)
            .field("admin_password", &self.admin_password.as_ref().map(|_| "[REDACTED]"))
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载默认值、`config/default`、`config/{APP_ENVIRONMENT}` 和
    /// `SONGBOOK__*` 环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("SONGBOOK")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// 带默认值的配置构建器
    ///
    /// `database.url` 与 `auth.jwt_secret` 没有默认值，必须由配置源提供
    pub fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("database.max_connections", 5)?
            .set_default("database.min_connections", 0)?
            .set_default("database.connect_timeout", 30)?
            .set_default("database.idle_timeout", 10)?
            .set_default("auth.token_ttl", "90d")
    }
}
