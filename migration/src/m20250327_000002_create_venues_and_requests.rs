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
                    .table(Venues::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Venues::VenueId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Venues::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Venues::UrlName).string_len(255).unique_key())
                    .col(
                        ColumnDef::new(Venues::Accepting)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Venues::Address1).string_len(255))
                    .col(ColumnDef::new(Venues::Address2).string_len(255))
                    .col(ColumnDef::new(Venues::City).string_len(255))
                    .col(ColumnDef::new(Venues::State).string_len(2))
                    .col(ColumnDef::new(Venues::Zip).string_len(10))
                    .col(ColumnDef::new(Venues::Lat).double())
                    .col(ColumnDef::new(Venues::Lon).double())
                    .col(
                        ColumnDef::new(Venues::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Venues::UpdatedAt)
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
                    .table(Requests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Requests::RequestId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Requests::VenueId).integer().not_null())
                    .col(ColumnDef::new(Requests::Artist).string_len(255).not_null())
                    .col(ColumnDef::new(Requests::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Requests::Singer).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Requests::RequestTime)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Requests::KeyChange)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_requests_venue_id")
                            .from(Requests::Table, Requests::VenueId)
                            .to(Venues::Table, Venues::VenueId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_requests_venue_time")
                    .table(Requests::Table)
                    .col(Requests::VenueId)
                    .col(Requests::RequestTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Requests::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Venues::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Venues {
    Table,
    VenueId,
    Name,
    UrlName,
    Accepting,
    Address1,
    Address2,
    City,
    State,
    Zip,
    Lat,
    Lon,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Requests {
    Table,
    RequestId,
    VenueId,
    Artist,
    Title,
    Singer,
    RequestTime,
    KeyChange,
}
