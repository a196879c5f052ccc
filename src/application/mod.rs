// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 请求数据传输对象、服务装配以及启动引导
pub mod bootstrap;
pub mod dto;
pub mod services;
