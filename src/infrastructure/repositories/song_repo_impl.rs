// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::pagination::PageRequest;
use crate::domain::models::song::{FieldQuery, FullTextQuery, NewSong, Song};
use crate::domain::repositories::song_repository::SongRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::song;
use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, OnConflict};
use sea_orm::*;
use std::sync::Arc;

/// 单条 INSERT 语句写入的最大行数
const INSERT_CHUNK: usize = 1000;

/// 转义 LIKE 通配符并包装为子串匹配模式
fn like_pattern(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len() + 2);
    escaped.push('%');
    for ch in fragment.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

/// 原生 SQL 的 WHERE 子句与参数
/// 与 `song_search::normalize` 一致：小写，非字母数字字符折叠为单个空格
fn normalized_column(column: &str) -> String {
    format!(
        "btrim(regexp_replace(lower({}), '[^[:alnum:]_]+', ' ', 'g'))",
        column
    )
}

struct FullTextClause {
    sql: String,
    values: Vec<Value>,
}

impl FullTextClause {
    fn build(query: &FullTextQuery) -> Self {
        let mut values: Vec<Value> = Vec::new();
        let mut matches = Vec::with_capacity(query.tsqueries.len());
        for tsquery in &query.tsqueries {
            values.push(tsquery.clone().into());
            matches.push(format!(
                "search_vector @@ to_tsquery('english', ${})",
                values.len()
            ));
        }

        let mut sql = format!("({})", matches.join(" OR "));
        for (column, filter) in [("artist", &query.artist), ("title", &query.title)] {
            if let Some(fragment) = filter {
                values.push(like_pattern(fragment).into());
                sql.push_str(&format!(
                    " AND {} LIKE ${}",
                    normalized_column(column),
                    values.len()
                ));
            }
        }
        Self { sql, values }
    }
}

/// 歌曲库仓库实现
///
/// 全文检索依赖 `songdb.search_vector` 生成列，使用原生 SQL
#[derive(Clone)]
pub struct SongRepoImpl {
    db: Arc<DatabaseConnection>,
}

impl SongRepoImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn count_raw(&self, sql: String, values: Vec<Value>) -> Result<u64, RepositoryError> {
        let row = self
            .db
            .query_one(Statement::from_sql_and_values(
                DbBackend::Postgres,
                sql,
                values,
            ))
            .await?;
        let count = match row {
            Some(row) => row.try_get::<i64>("", "count")?,
            None => 0,
        };
        Ok(u64::try_from(count).unwrap_or(0))
    }
}

#[async_trait]
impl SongRepository for SongRepoImpl {
    async fn find_by_id(&self, song_id: i32) -> Result<Option<Song>, RepositoryError> {
        let model = song::Entity::find_by_id(song_id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn search_full_text(
        &self,
        query: &FullTextQuery,
        page: PageRequest,
    ) -> Result<(Vec<Song>, u64), RepositoryError> {
        if query.tsqueries.is_empty() {
            return Ok((Vec::new(), 0));
        }
        let clause = FullTextClause::build(query);

        let total = self
            .count_raw(
                format!("SELECT COUNT(*) AS count FROM songdb WHERE {}", clause.sql),
                clause.values.clone(),
            )
            .await?;

        let mut values = clause.values;
        values.push(i64::try_from(page.limit()).unwrap_or(i64::MAX).into());
        let limit_idx = values.len();
        values.push(i64::try_from(page.offset()).unwrap_or(i64::MAX).into());
        let offset_idx = values.len();
        // $1 is always the first tsquery variant
        let sql = format!(
            "SELECT song_id, artist, title, combined FROM songdb WHERE {} \
             ORDER BY ts_rank(search_vector, to_tsquery('english', $1)) DESC, song_id ASC \
             LIMIT ${} OFFSET ${}",
            clause.sql, limit_idx, offset_idx
        );

        let models = song::Entity::find()
            .from_raw_sql(Statement::from_sql_and_values(
                DbBackend::Postgres,
                sql,
                values,
            ))
            .all(self.db.as_ref())
            .await?;
        Ok((models.into_iter().map(Into::into).collect(), total))
    }

    async fn search_by_fields(
        &self,
        query: &FieldQuery,
        page: PageRequest,
    ) -> Result<(Vec<Song>, u64), RepositoryError> {
        let mut select = song::Entity::find();
        if let Some(artist) = &query.artist {
            select = select.filter(
                Expr::expr(Func::lower(Expr::col(song::Column::Artist))).like(like_pattern(artist)),
            );
        }
        if let Some(title) = &query.title {
            select = select.filter(
                Expr::expr(Func::lower(Expr::col(song::Column::Title))).like(like_pattern(title)),
            );
        }

        let total = select.clone().count(self.db.as_ref()).await?;
        let models = select
            .order_by_asc(song::Column::Artist)
            .order_by_asc(song::Column::Title)
            .limit(page.limit())
            .offset(page.offset())
            .all(self.db.as_ref())
            .await?;
        Ok((models.into_iter().map(Into::into).collect(), total))
    }

    async fn list_artists(&self, page: PageRequest) -> Result<(Vec<String>, u64), RepositoryError> {
        let total = self
            .count_raw(
                "SELECT COUNT(DISTINCT artist) AS count FROM songdb".to_string(),
                Vec::new(),
            )
            .await?;

        let artists = song::Entity::find()
            .select_only()
            .column(song::Column::Artist)
            .distinct()
            .order_by_asc(song::Column::Artist)
            .limit(page.limit())
            .offset(page.offset())
            .into_tuple::<String>()
            .all(self.db.as_ref())
            .await?;
        Ok((artists, total))
    }

    async fn insert_ignoring_duplicates(&self, songs: &[NewSong]) -> Result<u64, RepositoryError> {
        let mut inserted = 0;
        for chunk in songs.chunks(INSERT_CHUNK) {
            let models = chunk.iter().map(|s| song::ActiveModel {
                artist: Set(s.artist.clone()),
                title: Set(s.title.clone()),
                combined: Set(s.combined.clone()),
                ..Default::default()
            });
            inserted += song::Entity::insert_many(models)
                .on_conflict(
                    OnConflict::column(song::Column::Combined)
                        .do_nothing()
                        .to_owned(),
                )
                .exec_without_returning(self.db.as_ref())
                .await?;
        }
        Ok(inserted)
    }

    async fn clear_all(&self) -> Result<u64, RepositoryError> {
        let result = song::Entity::delete_many()
            .exec(self.db.as_ref())
            .await?;
        Ok(result.rows_affected)
    }
}

impl From<song::Model> for Song {
    fn from(model: song::Model) -> Self {
        Self {
            song_id: model.song_id,
            artist: model.artist,
            title: model.title,
            combined: model.combined,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_text_filters_compare_normalized_columns() {
        let clause = FullTextClause::build(&FullTextQuery {
            tsqueries: vec!["back:*".to_string()],
            artist: Some("ac dc".to_string()),
            title: None,
        });
        assert_eq!(
            clause.sql,
            "(search_vector @@ to_tsquery('english', $1)) AND \
             btrim(regexp_replace(lower(artist), '[^[:alnum:]_]+', ' ', 'g')) LIKE $2"
        );
        assert_eq!(clause.values.len(), 2);
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("queen"), "%queen%");
        assert_eq!(like_pattern("100%_\\"), "%100\\%\\_\\\\%");
    }

    #[test]
    fn test_full_text_clause_numbers_placeholders() {
        let clause = FullTextClause::build(&FullTextQuery {
            tsqueries: vec!["fifty:* & cent:*".to_string(), "50:* & cent:*".to_string()],
            artist: Some("cent".to_string()),
            title: None,
        });

        assert_eq!(
            clause.sql,
            "(search_vector @@ to_tsquery('english', $1) OR \
             search_vector @@ to_tsquery('english', $2)) AND \
             btrim(regexp_replace(lower(artist), '[^[:alnum:]_]+', ' ', 'g')) LIKE $3"
        );
        assert_eq!(clause.values.len(), 3);
    }
}
