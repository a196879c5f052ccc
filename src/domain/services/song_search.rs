// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 歌曲检索词规范化
//!
//! 将用户输入转换为 PostgreSQL 前缀 tsquery，例如 `"Beatles, The"` →
//! `"the:* & beatles:*"`，`"50 Cent"` 额外生成 `"fifty:* & cent:*"`

use crate::domain::models::song::FullTextQuery;
use crate::utils::number_words::number_to_words;

/// 恰好一个逗号时交换前后两部分：`"Beatles, The"` → `"The Beatles"`
pub fn reorder_comma(query: &str) -> String {
    let mut parts = query.split(',');
    if let (Some(first), Some(second), None) = (parts.next(), parts.next(), parts.next()) {
        let (first, second) = (first.trim(), second.trim());
        if !first.is_empty() && !second.is_empty() {
            return format!("{} {}", second, first);
        }
    }
    query.to_string()
}

/// 小写化，标点替换为空格，合并连续空白
pub fn normalize(text: &str) -> String {
    let replaced: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { ' ' })
        .collect();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 把纯数字词项替换为英文单词
pub fn spell_out_numbers(normalized: &str) -> String {
    normalized
        .split(' ')
        .map(|token| {
            let numeric = !token.is_empty() && token.chars().all(|c| c.is_ascii_digit());
            match numeric.then(|| token.parse::<u64>().ok()).flatten() {
                Some(n) => number_to_words(n),
                None => token.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// 检索词的规范化变体，含数字时追加英文单词版本；规范化后为空则返回空列表
pub fn query_variants(query: &str) -> Vec<String> {
    let normalized = normalize(&reorder_comma(query));
    if normalized.is_empty() {
        return Vec::new();
    }
    let spelled = spell_out_numbers(&normalized);
    if spelled != normalized {
        vec![normalized, spelled]
    } else {
        vec![normalized]
    }
}

/// 每个词项转为前缀匹配并以 AND 连接
pub fn prefix_tsquery(variant: &str) -> String {
    variant
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(|t| format!("{}:*", t))
        .collect::<Vec<_>>()
        .join(" & ")
}

/// 字段过滤值：去除首尾空白并小写，空串视为未设置
pub fn field_filter(value: Option<&str>) -> Option<String> {
    value
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
}

/// 全文检索时的字段过滤值，与检索词同样规范化，空串视为未设置
pub fn normalized_filter(value: Option<&str>) -> Option<String> {
    value.map(normalize).filter(|v| !v.is_empty())
}

/// 构造全文检索条件，检索词规范化后为空时返回 `None`
pub fn full_text_query(
    query: &str,
    artist: Option<&str>,
    title: Option<&str>,
) -> Option<FullTextQuery> {
    let variants = query_variants(query);
    if variants.is_empty() {
        return None;
    }
    Some(FullTextQuery {
        tsqueries: variants.iter().map(|v| prefix_tsquery(v)).collect(),
        artist: normalized_filter(artist),
        title: normalized_filter(title),
    })
}
