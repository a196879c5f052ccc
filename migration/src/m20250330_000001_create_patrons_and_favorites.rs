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
                    .table(Patrons::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Patrons::PatronId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Patrons::FirstName).string_len(255))
                    .col(ColumnDef::new(Patrons::LastName).string_len(255))
                    .col(ColumnDef::new(Patrons::Email).string_len(255).unique_key())
                    .col(ColumnDef::new(Patrons::MobileNumber).string_len(32).unique_key())
                    .col(ColumnDef::new(Patrons::PasswordHash).string())
                    .col(
                        ColumnDef::new(Patrons::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Patrons::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Favorites::PatronId).integer().not_null())
                    .col(ColumnDef::new(Favorites::SongId).integer().not_null())
                    .col(
                        ColumnDef::new(Favorites::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(Favorites::PatronId)
                            .col(Favorites::SongId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_patron_id")
                            .from(Favorites::Table, Favorites::PatronId)
                            .to(Patrons::Table, Patrons::PatronId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_song_id")
                            .from(Favorites::Table, Favorites::SongId)
                            .to(Songdb::Table, Songdb::SongId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Patrons::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Patrons {
    Table,
    PatronId,
    FirstName,
    LastName,
    Email,
    MobileNumber,
    PasswordHash,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Favorites {
    Table,
    PatronId,
    SongId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Songdb {
    Table,
    SongId,
}
