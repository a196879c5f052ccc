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

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Songdb::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Songdb::SongId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Songdb::Artist).string_len(255).not_null())
                    .col(ColumnDef::new(Songdb::Title).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Songdb::Combined)
                            .string_len(511)
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // Generated tsvector column backing the full-text search
        let db = manager.get_connection();
        db.execute_unprepared(
            "ALTER TABLE songdb ADD COLUMN IF NOT EXISTS search_vector tsvector \
             GENERATED ALWAYS AS (to_tsvector('english', artist || ' ' || title)) STORED",
        )
        .await?;
        db.execute_unprepared(
            "CREATE INDEX IF NOT EXISTS idx_songdb_search_vector ON songdb USING GIN (search_vector)",
        )
        .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_songdb_artist")
                    .table(Songdb::Table)
                    .col(Songdb::Artist)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Songdb::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Songdb {
    Table,
    SongId,
    Artist,
    Title,
    Combined,
}
