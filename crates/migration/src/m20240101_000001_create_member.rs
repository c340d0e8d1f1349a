//! Create `member` table.
//!
//! Rows are owned by the external member-management subsystem; this service
//! only reads them by `username`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(uuid(Member::Id).primary_key())
                    .col(string_len(Member::Username, 128).unique_key().not_null())
                    .col(timestamp_with_time_zone(Member::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Member::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Member::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Member { Table, Id, Username, CreatedAt, UpdatedAt }
