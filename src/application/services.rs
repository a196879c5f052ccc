// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::domain::repositories::api_key_repository::ApiKeyRepository;
use crate::domain::repositories::favorite_repository::FavoriteRepository;
use crate::domain::repositories::patron_repository::PatronRepository;
use crate::domain::repositories::song_repository::SongRepository;
use crate::domain::repositories::song_request_repository::SongRequestRepository;
use crate::domain::repositories::state_repository::StateRepository;
use crate::domain::repositories::user_repository::UserRepository;
use crate::domain::repositories::venue_repository::VenueRepository;
use crate::domain::services::auth_service::AuthService;
use crate::domain::services::favorite_service::FavoriteService;
use crate::domain::services::openkj_service::{OpenKjAlert, OpenKjService};
use crate::domain::services::request_service::RequestService;
use crate::domain::services::serial_counter::SerialCounter;
use crate::domain::services::song_service::SongService;
use crate::domain::services::venue_service::VenueService;
use crate::infrastructure::repositories::{
    api_key_repo_impl::ApiKeyRepoImpl, favorite_repo_impl::FavoriteRepoImpl,
    patron_repo_impl::PatronRepoImpl, song_repo_impl::SongRepoImpl,
    song_request_repo_impl::SongRequestRepoImpl, state_repo_impl::StateRepoImpl,
    user_repo_impl::UserRepoImpl, venue_repo_impl::VenueRepoImpl,
};
use crate::infrastructure::security::jwt::TokenService;
use config::ConfigError;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// 全部仓库的集合
#[derive(Clone)]
pub struct Repositories {
    pub venues: Arc<dyn VenueRepository>,
    pub requests: Arc<dyn SongRequestRepository>,
    pub songs: Arc<dyn SongRepository>,
    pub users: Arc<dyn UserRepository>,
    pub api_keys: Arc<dyn ApiKeyRepository>,
    pub patrons: Arc<dyn PatronRepository>,
    pub favorites: Arc<dyn FavoriteRepository>,
    pub state: Arc<dyn StateRepository>,
}

impl Repositories {
    /// 基于 PostgreSQL 连接创建仓库
    pub fn postgres(db: Arc<DatabaseConnection>) -> Self {
        Self {
            venues: Arc::new(VenueRepoImpl::new(db.clone())),
            requests: Arc::new(SongRequestRepoImpl::new(db.clone())),
            songs: Arc::new(SongRepoImpl::new(db.clone())),
            users: Arc::new(UserRepoImpl::new(db.clone())),
            api_keys: Arc::new(ApiKeyRepoImpl::new(db.clone())),
            patrons: Arc::new(PatronRepoImpl::new(db.clone())),
            favorites: Arc::new(FavoriteRepoImpl::new(db.clone())),
            state: Arc::new(StateRepoImpl::new(db)),
        }
    }

    #[cfg(test)]
    pub fn in_memory(
        store: Arc<crate::domain::repositories::in_memory::InMemoryStore>,
    ) -> Self {
        Self {
            venues: store.clone(),
            requests: store.clone(),
            songs: store.clone(),
            users: store.clone(),
            api_keys: store.clone(),
            patrons: store.clone(),
            favorites: store.clone(),
            state: store,
        }
    }
}

/// 路由使用的全部领域服务
#[derive(Clone)]
pub struct AppServices {
    pub openkj: Arc<OpenKjService>,
    pub songs: Arc<SongService>,
    pub requests: Arc<RequestService>,
    pub venues: Arc<VenueService>,
    pub auth: Arc<AuthService>,
    pub favorites: Arc<FavoriteService>,
    pub serial: SerialCounter,
}

impl AppServices {
    /// 装配服务
    ///
    /// # 参数
    ///
    /// * `repos` - 仓库集合
    /// * `tokens` - JWT 令牌服务
    /// * `alert` - OpenKJ `getAlert` 提示
    pub fn new(repos: &Repositories, tokens: TokenService, alert: OpenKjAlert) -> Self {
        let serial = SerialCounter::new(repos.state.clone());
        Self {
            openkj: Arc::new(OpenKjService::new(
                repos.api_keys.clone(),
                repos.users.clone(),
                repos.venues.clone(),
                repos.requests.clone(),
                repos.songs.clone(),
                serial.clone(),
                alert,
            )),
            songs: Arc::new(SongService::new(repos.songs.clone())),
            requests: Arc::new(RequestService::new(
                repos.venues.clone(),
                repos.requests.clone(),
                serial.clone(),
            )),
            venues: Arc::new(VenueService::new(repos.venues.clone())),
            auth: Arc::new(AuthService::new(
                repos.users.clone(),
                repos.patrons.clone(),
                tokens,
            )),
            favorites: Arc::new(FavoriteService::new(
                repos.favorites.clone(),
                repos.songs.clone(),
            )),
            serial,
        }
    }

    /// 按配置装配服务
    pub fn from_settings(repos: &Repositories, settings: &Settings) -> Result<Self, ConfigError> {
        let tokens = TokenService::new(&settings.auth.jwt_secret, settings.auth.token_ttl()?);
        let alert = OpenKjAlert::new(
            settings.openkj.alert_title.clone(),
            settings.openkj.alert_message.clone(),
        );
        Ok(Self::new(repos, tokens, alert))
    }
}
