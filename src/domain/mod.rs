// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：核心业务实体和数据结构
/// - 仓库接口（repositories）：数据持久化抽象接口
/// - 服务（services）：序列号、OpenKJ 命令分发、点歌、检索、认证和收藏
///
/// 领域层只依赖仓库接口，具体存储由基础设施层提供。
pub mod models;
pub mod repositories;
pub mod services;
