// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含系统的核心业务逻辑服务，这些服务封装了业务规则，
/// 协调多个仓库来完成业务操作。
///
/// 包含的服务：
/// - 序列号（serial_counter）：OpenKJ 客户端轮询的全局变更计数
/// - OpenKJ 服务（openkj_service）：认证并分发 OpenKJ 命令
/// - 歌曲服务（song_service）与检索规范化（song_search）
/// - 点歌服务（request_service）：顾客提交点歌请求
/// - 场馆服务（venue_service）：公开场馆列表与距离过滤
/// - 认证服务（auth_service）：管理员登录、顾客注册登录与令牌校验
/// - 收藏服务（favorite_service）：顾客收藏歌曲
pub mod auth_service;
pub mod favorite_service;
pub mod openkj_service;
pub mod request_service;
pub mod serial_counter;
pub mod service_error;
pub mod song_search;
pub mod song_service;
pub mod venue_service;

#[cfg(test)]
mod request_service_test;

pub use service_error::ServiceError;
