// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use super::loose_id::LooseId;

/// OpenKJ 客户端支持的命令
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenKjCommand {
    GetSerial,
    GetRequests,
    DeleteRequest,
    SetAccepting,
    GetVenues,
    ClearRequests,
    AddSongs,
    ClearDatabase,
    GetAlert,
    GetEntitledSystemCount,
    ConnectionTest,
}

impl OpenKjCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpenKjCommand::GetSerial => "getSerial",
            OpenKjCommand::GetRequests => "getRequests",
            OpenKjCommand::DeleteRequest => "deleteRequest",
            OpenKjCommand::SetAccepting => "setAccepting",
            OpenKjCommand::GetVenues => "getVenues",
            OpenKjCommand::ClearRequests => "clearRequests",
            OpenKjCommand::AddSongs => "addSongs",
            OpenKjCommand::ClearDatabase => "clearDatabase",
            OpenKjCommand::GetAlert => "getAlert",
            OpenKjCommand::GetEntitledSystemCount => "getEntitledSystemCount",
            OpenKjCommand::ConnectionTest => "connectionTest",
        }
    }

    /// 命令是否作用于单个场馆，需要 `venue_id`
    pub fn requires_venue(&self) -> bool {
        matches!(
            self,
            OpenKjCommand::GetRequests
                | OpenKjCommand::DeleteRequest
                | OpenKjCommand::SetAccepting
                | OpenKjCommand::ClearRequests
        )
    }
}

impl fmt::Display for OpenKjCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl FromStr for OpenKjCommand {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "getSerial" => Ok(OpenKjCommand::GetSerial),
            "getRequests" => Ok(OpenKjCommand::GetRequests),
            "deleteRequest" => Ok(OpenKjCommand::DeleteRequest),
            "setAccepting" => Ok(OpenKjCommand::SetAccepting),
            "getVenues" => Ok(OpenKjCommand::GetVenues),
            "clearRequests" => Ok(OpenKjCommand::ClearRequests),
            "addSongs" => Ok(OpenKjCommand::AddSongs),
            "clearDatabase" => Ok(OpenKjCommand::ClearDatabase),
            "getAlert" => Ok(OpenKjCommand::GetAlert),
            "getEntitledSystemCount" => Ok(OpenKjCommand::GetEntitledSystemCount),
            "connectionTest" => Ok(OpenKjCommand::ConnectionTest),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}

/// OpenKJ 请求体
///
/// 客户端通常发送 JSON 对象；表单编码作为后备，无法解析时视为空请求体
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpenKjPayload {
    fields: Map<String, Value>,
}

impl OpenKjPayload {
    pub fn from_body(body: &[u8]) -> Self {
        if let Ok(Value::Object(fields)) = serde_json::from_slice::<Value>(body) {
            return Self { fields };
        }

        match serde_urlencoded::from_bytes::<Vec<(String, String)>>(body) {
            Ok(pairs) => Self {
                fields: pairs
                    .into_iter()
                    .map(|(k, v)| (k, Value::String(v)))
                    .collect(),
            },
            Err(_) => Self::default(),
        }
    }

    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }

    /// 原样回显给客户端的 `command` 字段
    pub fn raw_command(&self) -> Value {
        self.fields.get("command").cloned().unwrap_or(Value::Null)
    }

    /// 命令名，缺失、null 或空字符串时返回 `None`
    pub fn command_name(&self) -> Option<String> {
        match self.fields.get("command") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.is_empty() => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        }
    }

    pub fn command(&self) -> Option<OpenKjCommand> {
        self.command_name().and_then(|name| name.parse().ok())
    }

    pub fn api_key(&self) -> Option<&str> {
        match self.fields.get("api_key") {
            Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn venue_id(&self) -> LooseId {
        LooseId::from_value(self.fields.get("venue_id"))
    }

    pub fn request_id(&self) -> LooseId {
        LooseId::from_value(self.fields.get("request_id"))
    }

    /// `accepting` 字段的布尔值
    ///
    /// 接受 `true`/`false`、整数 1/0 以及字符串 `"1"`/`"0"`/`"true"`/`"false"`（不区分大小写）
    pub fn accepting(&self) -> Option<bool> {
        match self.fields.get("accepting")? {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => match n.as_i64() {
                Some(1) => Some(true),
                Some(0) => Some(false),
                _ => None,
            },
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "1" | "true" => Some(true),
                "0" | "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// `songs` 数组，不是数组时返回 `None`
    pub fn songs(&self) -> Option<&Vec<Value>> {
        self.fields.get("songs").and_then(Value::as_array)
    }

    pub fn system_id(&self) -> Option<&Value> {
        self.fields.get("system_id")
    }
}
