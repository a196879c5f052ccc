// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 具体实现由基础设施层提供，测试中使用内存实现。
///
/// 包含的仓库接口：
/// - 场馆仓库（venue_repository）
/// - 点歌请求仓库（song_request_repository）
/// - 歌曲库仓库（song_repository）
/// - 用户仓库（user_repository）与 API 密钥仓库（api_key_repository）
/// - 顾客仓库（patron_repository）与收藏仓库（favorite_repository）
/// - 全局状态仓库（state_repository），保存 OpenKJ 序列号
pub mod api_key_repository;
pub mod favorite_repository;
pub mod patron_repository;
pub mod repository_error;
pub mod song_repository;
pub mod song_request_repository;
pub mod state_repository;
pub mod user_repository;
pub mod venue_repository;

#[cfg(test)]
pub mod in_memory;

pub use repository_error::RepositoryError;
