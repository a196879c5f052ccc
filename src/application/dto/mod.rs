// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义应用程序层的数据传输对象
/// 用于在API请求和领域模型之间传输数据
pub mod auth_request;
pub mod favorite_request;
pub mod request_submission;
pub mod song_query;
pub mod venue_query;

use serde_json::Value;

/// 宽松解析整数：接受数字或数字字符串，其它情况返回 `None`
pub fn lenient_i32(value: Option<&Value>) -> Option<i32> {
    match value? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .and_then(|v| i32::try_from(v).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// 宽松解析非负整数查询参数，无法解析时返回 `None`
pub fn lenient_u64(value: Option<&str>) -> Option<u64> {
    value.and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lenient_i32() {
        assert_eq!(lenient_i32(Some(&json!(-2))), Some(-2));
        assert_eq!(lenient_i32(Some(&json!("3"))), Some(3));
        assert_eq!(lenient_i32(Some(&json!(" 4 "))), Some(4));
        assert_eq!(lenient_i32(Some(&json!(2.0))), Some(2));
        assert_eq!(lenient_i32(Some(&json!(2.5))), None);
        assert_eq!(lenient_i32(Some(&json!("up"))), None);
        assert_eq!(lenient_i32(Some(&json!(null))), None);
        assert_eq!(lenient_i32(None), None);
    }

    #[test]
    fn test_lenient_u64() {
        assert_eq!(lenient_u64(Some("2")), Some(2));
        assert_eq!(lenient_u64(Some("-1")), None);
        assert_eq!(lenient_u64(Some("abc")), None);
        assert_eq!(lenient_u64(None), None);
    }
}
