//! Create `member_ai` table: the AI company a member follows.
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
                    .table(MemberAi::Table)
                    .if_not_exists()
                    .col(uuid(MemberAi::Id).primary_key())
                    .col(uuid(MemberAi::MemberId).unique_key().not_null())
                    .col(text(MemberAi::AiCompany).not_null())
                    .col(timestamp_with_time_zone(MemberAi::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(MemberAi::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_ai_member")
                            .from(MemberAi::Table, MemberAi::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(MemberAi::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum MemberAi { Table, Id, MemberId, AiCompany, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Member { Table, Id }
