// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::Value;
use std::fmt;

/// 来自客户端、类型不受约束的整数 ID
///
/// 客户端可能发送数字、数字字符串、空串或其它值
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LooseId {
    /// 缺失、null 或空字符串
    #[default]
    Missing,
    /// 存在但不是合法的整数
    Invalid(String),
    Id(i32),
}

impl LooseId {
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => LooseId::Missing,
            Some(Value::Number(n)) => match n.as_i64().and_then(|v| i32::try_from(v).ok()) {
                Some(id) => LooseId::Id(id),
                None => LooseId::Invalid(n.to_string()),
            },
            Some(Value::String(s)) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    LooseId::Missing
                } else {
                    match trimmed.parse::<i32>() {
                        Ok(id) => LooseId::Id(id),
                        Err(_) => LooseId::Invalid(s.clone()),
                    }
                }
            }
            Some(Value::Bool(false)) => LooseId::Missing,
            Some(other) => LooseId::Invalid(other.to_string()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, LooseId::Missing)
    }

    pub fn id(&self) -> Option<i32> {
        match self {
            LooseId::Id(id) => Some(*id),
            _ => None,
        }
    }
}

impl fmt::Display for LooseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LooseId::Missing => Ok(()),
            LooseId::Invalid(raw) => write!(f, "{}", raw),
            LooseId::Id(id) => write!(f, "{}", id),
        }
    }
}
