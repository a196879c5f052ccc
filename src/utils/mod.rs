// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
/// 包括日志初始化、地理距离计算和数字转英文单词
pub mod geo;
pub mod number_words;
pub mod telemetry;
