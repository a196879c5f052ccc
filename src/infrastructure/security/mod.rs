// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 安全模块
///
/// 提供 argon2 密码哈希和 JWT 令牌的签发与校验
pub mod jwt;
pub mod password;
