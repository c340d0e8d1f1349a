//! Migrator registering entity-specific migrations in dependency order.
//! `member` must exist before the preference tables that reference it.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_member;
mod m20240101_000002_create_member_ai;
mod m20240101_000003_create_member_ai_field;
mod m20240101_000004_create_member_job;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_member::Migration),
            Box::new(m20240101_000002_create_member_ai::Migration),
            Box::new(m20240101_000003_create_member_ai_field::Migration),
            Box::new(m20240101_000004_create_member_job::Migration),
        ]
    }
}
