// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 基于 SeaORM 的领域仓库接口实现
pub mod api_key_repo_impl;
pub mod favorite_repo_impl;
pub mod patron_repo_impl;
pub mod song_repo_impl;
pub mod song_request_repo_impl;
pub mod state_repo_impl;
pub mod user_repo_impl;
pub mod venue_repo_impl;
