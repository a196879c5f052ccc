// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 中间件模块
///
/// 顾客 JWT 认证中间件
pub mod patron_auth_middleware;
