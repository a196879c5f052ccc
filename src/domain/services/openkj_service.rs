// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::api_key::ApiKey;
use crate::domain::models::loose_id::LooseId;
use crate::domain::models::openkj::{OpenKjCommand, OpenKjPayload};
use crate::domain::models::song::NewSong;
use crate::domain::models::venue::VenueFilter;
use crate::domain::repositories::api_key_repository::ApiKeyRepository;
use crate::domain::repositories::song_repository::SongRepository;
use crate::domain::repositories::song_request_repository::SongRequestRepository;
use crate::domain::repositories::user_repository::UserRepository;
use crate::domain::repositories::venue_repository::VenueRepository;
use crate::domain::repositories::RepositoryError;
use crate::domain::services::serial_counter::SerialCounter;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, error, info, info_span, warn, Instrument};

/// `getAlert` 返回的提示信息
#[derive(Debug, Clone, Default)]
pub struct OpenKjAlert {
    pub title: String,
    pub message: String,
}

impl OpenKjAlert {
    pub fn new(title: Option<String>, message: Option<String>) -> Self {
        Self {
            title: title.unwrap_or_default(),
            message: message.unwrap_or_default(),
        }
    }

    /// 有消息内容时才提示
    pub fn is_active(&self) -> bool {
        !self.message.trim().is_empty()
    }
}

/// 认证阶段的数据库错误，以 HTTP 500 返回
#[derive(Debug, thiserror::Error)]
#[error("Server error during authentication.")]
pub struct AuthenticationFailure {
    command: Value,
    #[source]
    source: RepositoryError,
}

impl AuthenticationFailure {
    pub fn body(&self) -> Value {
        json!({
            "command": self.command,
            "error": true,
            "errorString": "Server error during authentication.",
        })
    }
}

/// OpenKJ 命令分发服务
///
/// 按顺序完成 API 密钥认证、场馆存在性检查和命令分发。除认证阶段的数据库
/// 错误外，所有结果（包括业务错误）都以 `{command, error, errorString}` 形式返回。
pub struct OpenKjService {
    api_keys: Arc<dyn ApiKeyRepository>,
    users: Arc<dyn UserRepository>,
    venues: Arc<dyn VenueRepository>,
    requests: Arc<dyn SongRequestRepository>,
    songs: Arc<dyn SongRepository>,
    serial: SerialCounter,
    alert: OpenKjAlert,
}

fn error_reply(command: &Value, message: impl Into<String>) -> Value {
    json!({
        "command": command,
        "error": true,
        "errorString": message.into(),
    })
}

impl OpenKjService {
    pub fn new(
        api_keys: Arc<dyn ApiKeyRepository>,
        users: Arc<dyn UserRepository>,
        venues: Arc<dyn VenueRepository>,
        requests: Arc<dyn SongRequestRepository>,
        songs: Arc<dyn SongRepository>,
        serial: SerialCounter,
        alert: OpenKjAlert,
    ) -> Self {
        Self {
            api_keys,
            users,
            venues,
            requests,
            songs,
            serial,
            alert,
        }
    }

    /// 处理一次 OpenKJ 请求
    ///
    /// # 参数
    ///
    /// * `payload` - 已解析的请求体
    ///
    /// # 返回值
    ///
    /// * `Ok(Value)` - 以 HTTP 200 返回的响应体
    /// * `Err(AuthenticationFailure)` - 认证阶段数据库错误
    pub async fn dispatch(&self, payload: &OpenKjPayload) -> Result<Value, AuthenticationFailure> {
        let raw_command = payload.raw_command();

        let Some(key) = payload.api_key() else {
            warn!(command = %raw_command, "OpenKJ request without API key");
            return Ok(error_reply(
                &raw_command,
                "Authentication failed: API key is required.",
            ));
        };

        let api_key = match self.api_keys.find_by_key(key).await {
            Ok(Some(api_key)) => api_key,
            Ok(None) => {
                warn!(api_key = %ApiKey::redacted(key), "Invalid OpenKJ API key");
                return Ok(error_reply(
                    &raw_command,
                    "Authentication failed: Invalid API key.",
                ));
            }
            Err(e) => return Err(self.auth_failure(raw_command, e)),
        };

        if let Err(e) = self.api_keys.touch_last_used(api_key.api_key_id).await {
            warn!(error = %e, "Failed to record API key usage");
        }

        let admin_user = match self.users.find_by_id(api_key.user_id).await {
            Ok(Some(user)) => user.user_id.to_string(),
            Ok(None) => "N/A (User Deleted?)".to_string(),
            Err(e) => return Err(self.auth_failure(raw_command, e)),
        };

        let command = payload.command();
        if command.is_some_and(|c| c.requires_venue()) {
            let venue_id = payload.venue_id();
            if !venue_id.is_missing() {
                let exists = match venue_id.id() {
                    Some(id) => match self.venues.find_by_id(id).await {
                        Ok(venue) => venue.is_some(),
                        Err(e) => return Err(self.auth_failure(raw_command, e)),
                    },
                    None => false,
                };
                if !exists {
                    warn!(admin_user = %admin_user, venue_id = %venue_id, "OpenKJ venue not found");
                    return Ok(error_reply(
                        &raw_command,
                        format!("Operation failed: Venue ID {} not found.", venue_id),
                    ));
                }
            }
        }

        let Some(name) = payload.command_name() else {
            warn!(admin_user = %admin_user, "OpenKJ request without command");
            return Ok(error_reply(&Value::Null, "A valid command is required."));
        };

        let span = info_span!("openkj", command = %name, admin_user = %admin_user);
        let reply = async move {
            let Some(command) = command else {
                warn!("Unrecognized OpenKJ command");
                return error_reply(&raw_command, "Unrecognized Command.");
            };

            let venue_id = match (command.requires_venue(), payload.venue_id()) {
                (true, LooseId::Id(id)) => Some(id),
                (true, _) => {
                    warn!("Venue-scoped command without venue_id");
                    return error_reply(&raw_command, "Venue ID is required for this command.");
                }
                (false, _) => None,
            };

            self.execute(command, venue_id, payload).await
        }
        .instrument(span)
        .await;
        Ok(reply)
    }

    fn auth_failure(&self, command: Value, source: RepositoryError) -> AuthenticationFailure {
        error!(error = %source, "Database error during OpenKJ authentication");
        AuthenticationFailure { command, source }
    }

    async fn execute(
        &self,
        command: OpenKjCommand,
        venue_id: Option<i32>,
        payload: &OpenKjPayload,
    ) -> Value {
        // venue_id is always Some for venue-scoped commands
        match (command, venue_id) {
            (OpenKjCommand::GetSerial, _) => self.get_serial(command).await,
            (OpenKjCommand::GetRequests, Some(venue_id)) => {
                self.get_requests(command, venue_id).await
            }
            (OpenKjCommand::DeleteRequest, Some(venue_id)) => {
                self.delete_request(command, venue_id, payload).await
            }
            (OpenKjCommand::SetAccepting, Some(venue_id)) => {
                self.set_accepting(command, venue_id, payload).await
            }
            (OpenKjCommand::ClearRequests, Some(venue_id)) => {
                self.clear_requests(command, venue_id).await
            }
            (OpenKjCommand::GetVenues, _) => self.get_venues(command).await,
            (OpenKjCommand::AddSongs, _) => self.add_songs(command, payload).await,
            (OpenKjCommand::ClearDatabase, _) => self.clear_database(command).await,
            (OpenKjCommand::GetAlert, _) => self.get_alert(command),
            (OpenKjCommand::GetEntitledSystemCount, _) => {
                self.get_entitled_system_count(command).await
            }
            (OpenKjCommand::ConnectionTest, _) => json!({
                "command": command.as_str(),
                "connection": "ok",
            }),
            (_, None) => error_reply(
                &Value::from(command.as_str()),
                "Venue ID is required for this command.",
            ),
        }
    }

    async fn get_serial(&self, command: OpenKjCommand) -> Value {
        match self.serial.current().await {
            Ok(serial) => {
                info!(serial, "Retrieved serial");
                json!({ "command": command.as_str(), "serial": serial, "error": false })
            }
            Err(e) => {
                error!(error = %e, "Error retrieving serial");
                error_reply(&command.as_str().into(), "Error retrieving serial.")
            }
        }
    }

    async fn get_requests(&self, command: OpenKjCommand, venue_id: i32) -> Value {
        let result = async {
            let requests = self.requests.list_for_venue(venue_id).await?;
            let serial = self.serial.peek().await?;
            Ok::<_, RepositoryError>((requests, serial))
        }
        .await;

        match result {
            Ok((requests, serial)) => {
                info!(venue_id, count = requests.len(), serial, "Retrieved requests");
                let requests: Vec<Value> = requests
                    .into_iter()
                    .map(|r| {
                        json!({
                            "request_id": r.request_id,
                            "artist": r.artist,
                            "title": r.title,
                            "singer": r.singer,
                            "request_time": r.request_time.timestamp(),
                            "key_change": r.key_change,
                        })
                    })
                    .collect();
                json!({
                    "command": command.as_str(),
                    "requests": requests,
                    "error": false,
                    "serial": serial,
                })
            }
            Err(e) => {
                error!(venue_id, error = %e, "Error retrieving requests");
                error_reply(&command.as_str().into(), "Error retrieving requests.")
            }
        }
    }

    async fn delete_request(
        &self,
        command: OpenKjCommand,
        venue_id: i32,
        payload: &OpenKjPayload,
    ) -> Value {
        let request_id = match payload.request_id() {
            LooseId::Missing => {
                return error_reply(&command.as_str().into(), "Request ID is required.")
            }
            LooseId::Invalid(raw) => {
                warn!(venue_id, request_id = %raw, "Non-numeric request_id");
                return error_reply(&command.as_str().into(), "Request not found.");
            }
            LooseId::Id(id) => id,
        };

        match self.requests.delete_in_venue(request_id, venue_id).await {
            Ok(true) => {
                info!(venue_id, request_id, "Deleted request");
                let serial = self.serial.advance().await;
                json!({ "command": command.as_str(), "error": false, "serial": serial })
            }
            Ok(false) => {
                warn!(venue_id, request_id, "Request not found for deletion");
                error_reply(&command.as_str().into(), "Request not found.")
            }
            Err(e) => {
                error!(venue_id, request_id, error = %e, "Error deleting request");
                error_reply(&command.as_str().into(), "Error deleting request.")
            }
        }
    }

    async fn set_accepting(
        &self,
        command: OpenKjCommand,
        venue_id: i32,
        payload: &OpenKjPayload,
    ) -> Value {
        let Some(accepting) = payload.accepting() else {
            return error_reply(
                &command.as_str().into(),
                "A boolean accepting status (true/false or 1/0) is required.",
            );
        };

        match self.venues.set_accepting(venue_id, accepting).await {
            Ok(Some(venue)) => {
                info!(venue_id, accepting, "Set accepting status");
                let serial = self.serial.advance().await;
                json!({
                    "command": command.as_str(),
                    "error": false,
                    "venue_id": venue.venue_id,
                    "accepting": venue.accepting,
                    "serial": serial,
                })
            }
            Ok(None) => error_reply(&command.as_str().into(), "Venue not found."),
            Err(e) => {
                error!(venue_id, error = %e, "Error setting accepting status");
                error_reply(&command.as_str().into(), "Error setting accepting status.")
            }
        }
    }

    async fn get_venues(&self, command: OpenKjCommand) -> Value {
        match self.venues.list(&VenueFilter::default()).await {
            Ok(venues) => {
                info!(count = venues.len(), "Retrieved venues");
                let venues: Vec<Value> = venues
                    .into_iter()
                    .map(|v| {
                        json!({
                            "venue_id": v.venue_id,
                            "name": v.name,
                            "url_name": v.url_name,
                            "accepting": v.accepting,
                        })
                    })
                    .collect();
                json!({ "command": command.as_str(), "venues": venues, "error": false })
            }
            Err(e) => {
                error!(error = %e, "Error retrieving venues");
                error_reply(&command.as_str().into(), "Error retrieving venues.")
            }
        }
    }

    async fn clear_requests(&self, command: OpenKjCommand, venue_id: i32) -> Value {
        match self.requests.clear_venue(venue_id).await {
            Ok(count) => {
                info!(venue_id, count, "Cleared requests");
                let serial = self.serial.advance().await;
                json!({ "command": command.as_str(), "error": false, "serial": serial })
            }
            Err(e) => {
                error!(venue_id, error = %e, "Error clearing requests");
                error_reply(&command.as_str().into(), "Error clearing requests.")
            }
        }
    }

    async fn add_songs(&self, command: OpenKjCommand, payload: &OpenKjPayload) -> Value {
        if let Some(system_id) = payload.system_id() {
            debug!(system_id = %system_id, "addSongs system_id is not used for insertion");
        }

        let Some(entries) = payload.songs() else {
            warn!("addSongs without songs array");
            let serial = self.serial.peek().await.unwrap_or(0);
            return json!({
                "command": command.as_str(),
                "error": true,
                "errorString": "Songs array is required.",
                "errors": [],
                "entries processed": 0,
                "last_artist": null,
                "last_title": null,
                "serial": serial,
            });
        };

        let mut errors = Vec::new();
        let mut songs = Vec::with_capacity(entries.len());
        for entry in entries {
            match validate_song_entry(entry) {
                Ok(song) => songs.push(song),
                Err(message) => errors.push(message),
            }
        }
        let last = songs.last().map(|s| (s.artist.clone(), s.title.clone()));

        let mut processed = 0;
        let mut serial = self.serial.peek().await.unwrap_or(0);
        if songs.is_empty() {
            warn!(received = entries.len(), "No valid songs to add");
        } else {
            match self.songs.insert_ignoring_duplicates(&songs).await {
                Ok(inserted) => {
                    processed = songs.len();
                    info!(attempted = processed, inserted, "Added songs to songbook");
                    serial = self.serial.advance().await;
                }
                Err(e) => {
                    error!(error = %e, "Database error adding songs");
                    errors.push(format!("Database error during bulk add: {}", e));
                }
            }
        }

        let has_errors = !errors.is_empty();
        if has_errors {
            warn!(errors = errors.len(), processed, "addSongs completed with errors");
        }
        let (last_artist, last_title) = match last {
            Some((artist, title)) => (Value::from(artist), Value::from(title)),
            None => (Value::Null, Value::Null),
        };
        json!({
            "command": command.as_str(),
            "error": has_errors,
            "errorString": if has_errors {
                Value::from("Errors occurred during song addition. Check 'errors' array.")
            } else {
                Value::Null
            },
            "errors": errors,
            "entries processed": processed,
            "last_artist": last_artist,
            "last_title": last_title,
            "serial": serial,
        })
    }

    async fn clear_database(&self, command: OpenKjCommand) -> Value {
        match self.songs.clear_all().await {
            Ok(count) => {
                info!(count, "Cleared songbook");
                let serial = self.serial.advance().await;
                json!({ "command": command.as_str(), "error": false, "serial": serial })
            }
            Err(e) => {
                error!(error = %e, "Error clearing songbook");
                error_reply(&command.as_str().into(), "Error clearing song database.")
            }
        }
    }

    fn get_alert(&self, command: OpenKjCommand) -> Value {
        let active = self.alert.is_active();
        json!({
            "command": command.as_str(),
            "error": false,
            "alert": active,
            "title": if active { self.alert.title.as_str() } else { "" },
            "message": if active { self.alert.message.as_str() } else { "" },
        })
    }

    async fn get_entitled_system_count(&self, command: OpenKjCommand) -> Value {
        match self.venues.count().await {
            Ok(count) => {
                info!(count, "Reported entitled system count");
                json!({ "command": command.as_str(), "error": false, "count": count.max(1) })
            }
            Err(e) => {
                error!(error = %e, "Error retrieving venue count");
                error_reply(
                    &command.as_str().into(),
                    "Error retrieving entitled system count.",
                )
            }
        }
    }
}

/// 校验 `addSongs` 的单个条目
fn validate_song_entry(entry: &Value) -> Result<NewSong, String> {
    let field = |name: &str| match entry.get(name) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
        _ => None,
    };

    let (Some(artist), Some(title)) = (field("artist"), field("title")) else {
        return Err(format!(
            "Invalid song entry (missing/invalid artist or title): {}",
            entry
        ));
    };

    let (artist, title) = (artist.trim(), title.trim());
    if artist.is_empty() || title.is_empty() {
        return Err(format!(
            "Invalid song entry (empty artist or title after trim): {}",
            entry
        ));
    }

    Ok(NewSong::new(artist, title))
}
