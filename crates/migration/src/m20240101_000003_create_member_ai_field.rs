//! Create `member_ai_field` table: the AI field a member is interested in.
//!
//! `member_id` is unique, so a member holds at most one row here.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MemberAiField::Table)
                    .if_not_exists()
                    .col(uuid(MemberAiField::Id).primary_key())
                    .col(uuid(MemberAiField::MemberId).unique_key().not_null())
                    .col(text(MemberAiField::AiField).not_null())
                    .col(timestamp_with_time_zone(MemberAiField::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(MemberAiField::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_ai_field_member")
                            .from(MemberAiField::Table, MemberAiField::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(MemberAiField::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum MemberAiField { Table, Id, MemberId, AiField, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Member { Table, Id }
