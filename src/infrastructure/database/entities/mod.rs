// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库实体模块
///
/// 定义数据库表对应的实体结构
/// 使用SeaORM框架进行对象关系映射
pub mod api_key;
pub mod favorite;
pub mod patron;
pub mod song;
pub mod song_request;
pub mod state;
pub mod user;
pub mod venue;
