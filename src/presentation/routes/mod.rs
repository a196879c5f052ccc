// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::services::AppServices;
use crate::config::settings::CorsSettings;
use crate::presentation::handlers::{
    auth_handler, favorite_handler, health_handler, openkj_handler, request_handler, song_handler,
    venue_handler,
};
use crate::presentation::middleware::patron_auth_middleware::patron_auth_middleware;
use axum::{
    extract::Extension,
    http::HeaderValue,
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;


/// 创建应用路由
///
/// # 参数
///
/// * `services` - 已装配的领域服务
/// * `cors` - 跨域配置
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes(services: AppServices, cors: &CorsSettings) -> Router {
    let public_routes = Router::new()
        .route("/", get(health_handler::root))
        .route("/api/health", get(health_handler::health_check))
        .route("/api/openkj", post(openkj_handler::handle_command))
        .route("/api/songs/search", get(song_handler::search_songs))
        .route("/api/songs/artists", get(song_handler::list_artists))
        .route("/api/songs/{song_id}", get(song_handler::get_song))
        .route("/api/requests", post(request_handler::submit_request))
        .route(
            "/api/public/venues",
            get(venue_handler::list_public_venues),
        )
        .route("/api/auth/login", post(auth_handler::admin_login))
        .route(
            "/api/patron/auth/register",
            post(auth_handler::patron_register),
        )
        .route("/api/patron/auth/login", post(auth_handler::patron_login));

    let patron_routes = Router::new()
        .route(
            "/",
            get(favorite_handler::list_favorites).post(favorite_handler::add_favorite),
        )
        .route("/{song_id}", delete(favorite_handler::remove_favorite))
        .route_layer(middleware::from_fn_with_state(
            services.auth.clone(),
            patron_auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .nest("/api/patron/favorites", patron_routes)
        .layer(Extension(services.openkj))
        .layer(Extension(services.songs))
        .layer(Extension(services.requests))
        .layer(Extension(services.venues))
        .layer(Extension(services.auth))
        .layer(Extension(services.favorites))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors))
}

/// 按配置构建跨域层，来源列表为空时允许任意来源
pub fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if settings.allowed_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = settings
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin.trim()) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}
