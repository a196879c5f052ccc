// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 测试用的内存仓库，同时实现全部仓库特质

use super::api_key_repository::ApiKeyRepository;
use super::favorite_repository::FavoriteRepository;
use super::patron_repository::PatronRepository;
use super::song_repository::SongRepository;
use super::song_request_repository::SongRequestRepository;
use super::state_repository::StateRepository;
use super::user_repository::UserRepository;
use super::venue_repository::VenueRepository;
use super::RepositoryError;
use crate::domain::models::api_key::{ApiKey, NewApiKey};
use crate::domain::models::favorite::{Favorite, FavoriteSong};
use crate::domain::models::pagination::PageRequest;
use crate::domain::models::patron::{NewPatron, Patron};
use crate::domain::models::song::{FieldQuery, FullTextQuery, NewSong, Song};
use crate::domain::models::song_request::{NewSongRequest, SongRequest};
use crate::domain::models::user::{NewUser, User};
use crate::domain::models::venue::{Venue, VenueFilter};
use crate::domain::services::song_search::normalize;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use std::collections::HashSet;
use tokio::sync::Mutex;

#[derive(Default)]
struct Tables {
    venues: Vec<Venue>,
    requests: Vec<SongRequest>,
    songs: Vec<Song>,
    users: Vec<User>,
    api_keys: Vec<ApiKey>,
    patrons: Vec<Patron>,
    favorites: Vec<Favorite>,
    serial: Option<i32>,
    next_id: i32,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

/// 内存仓库
///
/// `fail` 注入指定操作的数据库错误，操作名形如 `"songs.insert"`
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
    failing: std::sync::Mutex<HashSet<&'static str>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        let store = Self::default();
        store.tables.try_lock().expect("fresh store").serial = Some(0);
        store
    }

    pub fn fail(&self, operation: &'static str) {
        self.failing.lock().unwrap().insert(operation);
    }

    fn check(&self, operation: &'static str) -> Result<(), RepositoryError> {
        if self.failing.lock().unwrap().contains(operation) {
            Err(RepositoryError::Database(DbErr::Custom(format!(
                "injected failure: {}",
                operation
            ))))
        } else {
            Ok(())
        }
    }

    pub async fn insert_venue(&self, name: &str, accepting: bool) -> Venue {
        self.insert_venue_at(name, accepting, None).await
    }

    pub async fn insert_venue_at(
        &self,
        name: &str,
        accepting: bool,
        coordinates: Option<(f64, f64)>,
    ) -> Venue {
        let mut tables = self.tables.lock().await;
        let venue_id = tables.next_id();
        let now = Utc::now();
        let venue = Venue {
            venue_id,
            name: name.to_string(),
            url_name: Some(name.to_lowercase().replace(' ', "-")),
            accepting,
            address1: None,
            address2: None,
            city: None,
            state: None,
            zip: None,
            lat: coordinates.map(|c| c.0),
            lon: coordinates.map(|c| c.1),
            created_at: now,
            updated_at: now,
        };
        tables.venues.push(venue.clone());
        venue
    }

    pub async fn insert_user(&self, username: &str, password_hash: &str, is_admin: bool) -> User {
        UserRepository::create(
            self,
            NewUser {
                username: username.to_string(),
                password_hash: password_hash.to_string(),
                email: format!("{}@example.com", username),
                is_admin,
            },
        )
        .await
        .unwrap()
    }

    pub async fn insert_api_key(&self, user_id: i32, key: &str) -> ApiKey {
        ApiKeyRepository::create(
            self,
            NewApiKey {
                key: key.to_string(),
                user_id,
                description: None,
            },
        )
        .await
        .unwrap()
    }

    pub async fn insert_song(&self, artist: &str, title: &str) -> Song {
        let mut tables = self.tables.lock().await;
        let song_id = tables.next_id();
        let new = NewSong::new(artist, title);
        let song = Song {
            song_id,
            artist: new.artist,
            title: new.title,
            combined: new.combined,
        };
        tables.songs.push(song.clone());
        song
    }

    /// 未注册顾客：只有邮箱，没有密码
    pub async fn insert_guest_patron(&self, email: &str) -> Patron {
        let mut tables = self.tables.lock().await;
        let patron_id = tables.next_id();
        let now = Utc::now();
        let patron = Patron {
            patron_id,
            first_name: None,
            last_name: None,
            email: Some(email.to_string()),
            mobile_number: None,
            password_hash: None,
            created_at: now,
            updated_at: now,
        };
        tables.patrons.push(patron.clone());
        patron
    }

    pub async fn remove_patron(&self, patron_id: i32) {
        let mut tables = self.tables.lock().await;
        tables.patrons.retain(|p| p.patron_id != patron_id);
        tables.favorites.retain(|f| f.patron_id != patron_id);
    }

    pub async fn drop_state_row(&self) {
        self.tables.lock().await.serial = None;
    }

    pub async fn set_serial(&self, serial: i32) {
        self.tables.lock().await.serial = Some(serial);
    }

    pub async fn requests(&self) -> Vec<SongRequest> {
        self.tables.lock().await.requests.clone()
    }

    pub async fn songs(&self) -> Vec<Song> {
        self.tables.lock().await.songs.clone()
    }

    pub async fn api_keys(&self) -> Vec<ApiKey> {
        self.tables.lock().await.api_keys.clone()
    }

    pub async fn venue(&self, venue_id: i32) -> Option<Venue> {
        self.tables
            .lock()
            .await
            .venues
            .iter()
            .find(|v| v.venue_id == venue_id)
            .cloned()
    }
}

fn page_of<T: Clone>(items: &[T], page: PageRequest) -> Vec<T> {
    items
        .iter()
        .skip(page.offset() as usize)
        .take(page.limit() as usize)
        .cloned()
        .collect()
}

fn contains_ci(haystack: &str, needle: &Option<String>) -> bool {
    needle
        .as_ref()
        .is_none_or(|n| haystack.to_lowercase().contains(&n.to_lowercase()))
}

fn contains_normalized(haystack: &str, needle: &Option<String>) -> bool {
    needle.as_ref().is_none_or(|n| normalize(haystack).contains(n.as_str()))
}

/// 近似 `to_tsquery` 前缀匹配：每个词项都要是某个单词的前缀
fn matches_tsquery(song: &Song, tsquery: &str) -> bool {
    let text = format!("{} {}", song.artist, song.title).to_lowercase();
    let words: Vec<String> = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect();
    tsquery
        .split(" & ")
        .map(|term| term.trim_end_matches(":*"))
        .filter(|term| !term.is_empty())
        .all(|term| words.iter().any(|w| w.starts_with(term)))
}

#[async_trait]
impl VenueRepository for InMemoryStore {
    async fn find_by_id(&self, venue_id: i32) -> Result<Option<Venue>, RepositoryError> {
        self.check("venues.find")?;
        Ok(self.venue(venue_id).await)
    }

    async fn list(&self, filter: &VenueFilter) -> Result<Vec<Venue>, RepositoryError> {
        self.check("venues.list")?;
        let tables = self.tables.lock().await;
        let mut venues: Vec<Venue> = tables
            .venues
            .iter()
            .filter(|v| filter.venue_id.is_none_or(|id| v.venue_id == id))
            .filter(|v| {
                filter
                    .url_name
                    .as_ref()
                    .is_none_or(|u| v.url_name.as_deref() == Some(u.as_str()))
            })
            .cloned()
            .collect();
        venues.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(venues)
    }

    async fn set_accepting(
        &self,
        venue_id: i32,
        accepting: bool,
    ) -> Result<Option<Venue>, RepositoryError> {
        self.check("venues.update")?;
        let mut tables = self.tables.lock().await;
        Ok(tables
            .venues
            .iter_mut()
            .find(|v| v.venue_id == venue_id)
            .map(|v| {
                v.accepting = accepting;
                v.updated_at = Utc::now();
                v.clone()
            }))
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        self.check("venues.count")?;
        Ok(self.tables.lock().await.venues.len() as u64)
    }
}

#[async_trait]
impl SongRequestRepository for InMemoryStore {
    async fn create(&self, request: NewSongRequest) -> Result<SongRequest, RepositoryError> {
        self.check("requests.create")?;
        let mut tables = self.tables.lock().await;
        let request_id = tables.next_id();
        // Strictly increasing times keep ordering deterministic
        let request_time = Utc::now() + Duration::milliseconds(request_id as i64);
        let created = SongRequest {
            request_id,
            venue_id: request.venue_id,
            artist: request.artist,
            title: request.title,
            singer: request.singer,
            request_time,
            key_change: request.key_change,
        };
        tables.requests.push(created.clone());
        Ok(created)
    }

    async fn list_for_venue(&self, venue_id: i32) -> Result<Vec<SongRequest>, RepositoryError> {
        self.check("requests.list")?;
        let tables = self.tables.lock().await;
        let mut requests: Vec<SongRequest> = tables
            .requests
            .iter()
            .filter(|r| r.venue_id == venue_id)
            .cloned()
            .collect();
        requests.sort_by_key(|r| (r.request_time, r.request_id));
        Ok(requests)
    }

    async fn delete_in_venue(
        &self,
        request_id: i32,
        venue_id: i32,
    ) -> Result<bool, RepositoryError> {
        self.check("requests.delete")?;
        let mut tables = self.tables.lock().await;
        let before = tables.requests.len();
        tables
            .requests
            .retain(|r| !(r.request_id == request_id && r.venue_id == venue_id));
        Ok(tables.requests.len() != before)
    }

    async fn clear_venue(&self, venue_id: i32) -> Result<u64, RepositoryError> {
        self.check("requests.clear")?;
        let mut tables = self.tables.lock().await;
        let before = tables.requests.len();
        tables.requests.retain(|r| r.venue_id != venue_id);
        Ok((before - tables.requests.len()) as u64)
    }
}

#[async_trait]
impl SongRepository for InMemoryStore {
    async fn find_by_id(&self, song_id: i32) -> Result<Option<Song>, RepositoryError> {
        self.check("songs.find")?;
        let tables = self.tables.lock().await;
        Ok(tables.songs.iter().find(|s| s.song_id == song_id).cloned())
    }

    async fn search_full_text(
        &self,
        query: &FullTextQuery,
        page: PageRequest,
    ) -> Result<(Vec<Song>, u64), RepositoryError> {
        self.check("songs.search")?;
        let tables = self.tables.lock().await;
        let mut matched: Vec<Song> = tables
            .songs
            .iter()
            .filter(|s| query.tsqueries.iter().any(|q| matches_tsquery(s, q)))
            .filter(|s| contains_normalized(&s.artist, &query.artist))
            .filter(|s| contains_normalized(&s.title, &query.title))
            .cloned()
            .collect();
        matched.sort_by(|a, b| (&a.artist, &a.title).cmp(&(&b.artist, &b.title)));
        let total = matched.len() as u64;
        Ok((page_of(&matched, page), total))
    }

    async fn search_by_fields(
        &self,
        query: &FieldQuery,
        page: PageRequest,
    ) -> Result<(Vec<Song>, u64), RepositoryError> {
        self.check("songs.search")?;
        let tables = self.tables.lock().await;
        let mut matched: Vec<Song> = tables
            .songs
            .iter()
            .filter(|s| contains_ci(&s.artist, &query.artist))
            .filter(|s| contains_ci(&s.title, &query.title))
            .cloned()
            .collect();
        matched.sort_by(|a, b| (&a.artist, &a.title).cmp(&(&b.artist, &b.title)));
        let total = matched.len() as u64;
        Ok((page_of(&matched, page), total))
    }

    async fn list_artists(&self, page: PageRequest) -> Result<(Vec<String>, u64), RepositoryError> {
        self.check("songs.artists")?;
        let tables = self.tables.lock().await;
        let mut artists: Vec<String> = tables.songs.iter().map(|s| s.artist.clone()).collect();
        artists.sort();
        artists.dedup();
        let total = artists.len() as u64;
        Ok((page_of(&artists, page), total))
    }

    async fn insert_ignoring_duplicates(&self, songs: &[NewSong]) -> Result<u64, RepositoryError> {
        self.check("songs.insert")?;
        let mut tables = self.tables.lock().await;
        let mut inserted = 0;
        for song in songs {
            if tables.songs.iter().any(|s| s.combined == song.combined) {
                continue;
            }
            let song_id = tables.next_id();
            tables.songs.push(Song {
                song_id,
                artist: song.artist.clone(),
                title: song.title.clone(),
                combined: song.combined.clone(),
            });
            inserted += 1;
        }
        Ok(inserted)
    }

    async fn clear_all(&self) -> Result<u64, RepositoryError> {
        self.check("songs.clear")?;
        let mut tables = self.tables.lock().await;
        let removed = tables.songs.len() as u64;
        tables.songs.clear();
        tables.favorites.clear();
        Ok(removed)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, RepositoryError> {
        self.check("users.find")?;
        let tables = self.tables.lock().await;
        Ok(tables.users.iter().find(|u| u.user_id == user_id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        self.check("users.find")?;
        let tables = self.tables.lock().await;
        Ok(tables.users.iter().find(|u| u.username == username).cloned())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        self.check("users.count")?;
        Ok(self.tables.lock().await.users.len() as u64)
    }

    async fn create(&self, user: NewUser) -> Result<User, RepositoryError> {
        self.check("users.create")?;
        let mut tables = self.tables.lock().await;
        if tables
            .users
            .iter()
            .any(|u| u.username == user.username || u.email == user.email)
        {
            return Err(RepositoryError::Conflict("users".to_string()));
        }
        let user_id = tables.next_id();
        let now = Utc::now();
        let created = User {
            user_id,
            username: user.username,
            password_hash: user.password_hash,
            email: user.email,
            is_admin: user.is_admin,
            created_at: now,
            updated_at: now,
        };
        tables.users.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl ApiKeyRepository for InMemoryStore {
    async fn find_by_key(&self, key: &str) -> Result<Option<ApiKey>, RepositoryError> {
        self.check("api_keys.find")?;
        let tables = self.tables.lock().await;
        Ok(tables.api_keys.iter().find(|k| k.key == key).cloned())
    }

    async fn touch_last_used(&self, api_key_id: i32) -> Result<(), RepositoryError> {
        self.check("api_keys.touch")?;
        let mut tables = self.tables.lock().await;
        if let Some(key) = tables
            .api_keys
            .iter_mut()
            .find(|k| k.api_key_id == api_key_id)
        {
            key.last_used_at = Some(Utc::now());
        }
        Ok(())
    }

    async fn create(&self, api_key: NewApiKey) -> Result<ApiKey, RepositoryError> {
        self.check("api_keys.create")?;
        let mut tables = self.tables.lock().await;
        let api_key_id = tables.next_id();
        let created = ApiKey {
            api_key_id,
            key: api_key.key,
            user_id: api_key.user_id,
            description: api_key.description,
            last_used_at: None,
            created_at: Utc::now(),
        };
        tables.api_keys.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl PatronRepository for InMemoryStore {
    async fn find_by_id(&self, patron_id: i32) -> Result<Option<Patron>, RepositoryError> {
        self.check("patrons.find")?;
        let tables = self.tables.lock().await;
        Ok(tables
            .patrons
            .iter()
            .find(|p| p.patron_id == patron_id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Patron>, RepositoryError> {
        self.check("patrons.find")?;
        let tables = self.tables.lock().await;
        Ok(tables
            .patrons
            .iter()
            .find(|p| p.email.as_deref() == Some(email))
            .cloned())
    }

    async fn create(&self, patron: NewPatron) -> Result<Patron, RepositoryError> {
        self.check("patrons.create")?;
        let mut tables = self.tables.lock().await;
        let duplicate = tables.patrons.iter().any(|p| {
            p.email.as_deref() == Some(patron.email.as_str())
                || (patron.mobile_number.is_some() && p.mobile_number == patron.mobile_number)
        });
        if duplicate {
            return Err(RepositoryError::Conflict("patrons".to_string()));
        }
        let patron_id = tables.next_id();
        let now = Utc::now();
        let created = Patron {
            patron_id,
            first_name: patron.first_name,
            last_name: patron.last_name,
            email: Some(patron.email),
            mobile_number: patron.mobile_number,
            password_hash: Some(patron.password_hash),
            created_at: now,
            updated_at: now,
        };
        tables.patrons.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl FavoriteRepository for InMemoryStore {
    async fn list_for_patron(&self, patron_id: i32) -> Result<Vec<FavoriteSong>, RepositoryError> {
        self.check("favorites.list")?;
        let tables = self.tables.lock().await;
        let mut favorites: Vec<FavoriteSong> = tables
            .favorites
            .iter()
            .filter(|f| f.patron_id == patron_id)
            .filter_map(|f| {
                tables
                    .songs
                    .iter()
                    .find(|s| s.song_id == f.song_id)
                    .map(|s| FavoriteSong {
                        song_id: s.song_id,
                        artist: s.artist.clone(),
                        title: s.title.clone(),
                        favorited_at: f.created_at,
                    })
            })
            .collect();
        favorites.sort_by(|a, b| b.favorited_at.cmp(&a.favorited_at));
        Ok(favorites)
    }

    async fn add(&self, patron_id: i32, song_id: i32) -> Result<(Favorite, bool), RepositoryError> {
        self.check("favorites.add")?;
        let mut tables = self.tables.lock().await;
        if let Some(existing) = tables
            .favorites
            .iter()
            .find(|f| f.patron_id == patron_id && f.song_id == song_id)
        {
            return Ok((existing.clone(), false));
        }
        if !tables.songs.iter().any(|s| s.song_id == song_id)
            || !tables.patrons.iter().any(|p| p.patron_id == patron_id)
        {
            return Err(RepositoryError::InvalidReference("favorites".to_string()));
        }
        let order = tables.next_id();
        let favorite = Favorite {
            patron_id,
            song_id,
            created_at: Utc::now() + Duration::milliseconds(order as i64),
        };
        tables.favorites.push(favorite.clone());
        Ok((favorite, true))
    }

    async fn remove(&self, patron_id: i32, song_id: i32) -> Result<bool, RepositoryError> {
        self.check("favorites.remove")?;
        let mut tables = self.tables.lock().await;
        let before = tables.favorites.len();
        tables
            .favorites
            .retain(|f| !(f.patron_id == patron_id && f.song_id == song_id));
        Ok(tables.favorites.len() != before)
    }
}

#[async_trait]
impl StateRepository for InMemoryStore {
    async fn ensure_row(&self) -> Result<bool, RepositoryError> {
        self.check("state.ensure")?;
        let mut tables = self.tables.lock().await;
        if tables.serial.is_some() {
            Ok(false)
        } else {
            tables.serial = Some(0);
            Ok(true)
        }
    }

    async fn serial(&self) -> Result<Option<i32>, RepositoryError> {
        self.check("state.read")?;
        Ok(self.tables.lock().await.serial)
    }

    async fn increment_serial(&self) -> Result<Option<i32>, RepositoryError> {
        self.check("state.increment")?;
        let mut tables = self.tables.lock().await;
        Ok(tables.serial.as_mut().map(|s| {
            *s += 1;
            *s
        }))
    }
}
