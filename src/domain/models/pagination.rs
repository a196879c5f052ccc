// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 单页最大条目数
pub const MAX_PAGE_SIZE: u64 = 500;

/// 分页请求，页码从 1 开始
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
}

impl PageRequest {
    /// 规范化分页参数：页码至少为 1，页大小在 1 到 [`MAX_PAGE_SIZE`] 之间
    ///
    /// 页码上限保证偏移量不超过 `i64::MAX`，超出范围的页返回空结果
    pub fn new(page: Option<u64>, size: Option<u64>, default_size: u64) -> Self {
        let size = size
            .filter(|s| *s > 0)
            .unwrap_or(default_size)
            .clamp(1, MAX_PAGE_SIZE);
        let page = page.unwrap_or(1).clamp(1, i64::MAX as u64 / size);
        Self { page, size }
    }

    pub fn limit(&self) -> u64 {
        self.size
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.size)
    }
}

/// 一页结果及总数
#[derive(Debug, Clone, PartialEq)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub size: u64,
}

impl<T> Paged<T> {
    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.size.max(1))
    }
}
