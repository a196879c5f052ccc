// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 场馆（venue）与点歌请求（song_request）
/// - 歌曲库（song）与顾客收藏（favorite）
/// - 后台用户（user）、API 密钥（api_key）和顾客（patron）
/// - OpenKJ 命令与请求体（openkj）
///
/// 以及分页（pagination）和宽松整数 ID（loose_id）等通用值类型。
pub mod api_key;
pub mod favorite;
pub mod loose_id;
pub mod openkj;
pub mod pagination;
pub mod patron;
pub mod song;
pub mod song_request;
pub mod user;
pub mod venue;
