//! Create `member_job` table: the job a member is interested in.
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
                    .table(MemberJob::Table)
                    .if_not_exists()
                    .col(uuid(MemberJob::Id).primary_key())
                    .col(uuid(MemberJob::MemberId).unique_key().not_null())
                    .col(text(MemberJob::Job).not_null())
                    .col(timestamp_with_time_zone(MemberJob::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(MemberJob::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_job_member")
                            .from(MemberJob::Table, MemberJob::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(MemberJob::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum MemberJob { Table, Id, MemberId, Job, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Member { Table, Id }
