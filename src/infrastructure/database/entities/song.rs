// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;

/// 歌曲库
///
/// 表中的 `search_vector` 是数据库生成列，只在原生 SQL 中引用
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "songdb")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub song_id: i32,
    pub artist: String,
    pub title: String,
    #[sea_orm(unique)]
    pub combined: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
