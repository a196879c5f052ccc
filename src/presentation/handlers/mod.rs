// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 请求处理器模块
pub mod auth_handler;
pub mod favorite_handler;
pub mod health_handler;
pub mod openkj_handler;
pub mod request_handler;
pub mod song_handler;
pub mod venue_handler;
