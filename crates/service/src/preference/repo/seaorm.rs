use sea_orm::DatabaseConnection;
use uuid::Uuid;

use models::{member, member_ai, member_ai_field, member_job};

use crate::errors::ServiceError;
use crate::preference::domain::{Member, Preference, PreferenceKind};
use crate::preference::repository::PreferenceRepository;

/// SeaORM-backed repository; one table per preference kind.
#[derive(Clone)]
pub struct SeaOrmPreferenceRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmPreferenceRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn from_ai(m: member_ai::Model) -> Preference {
    Preference { id: Some(m.id), member_id: m.member_id, kind: PreferenceKind::AiCompany, value: m.ai_company }
}

fn from_ai_field(m: member_ai_field::Model) -> Preference {
    Preference { id: Some(m.id), member_id: m.member_id, kind: PreferenceKind::AiField, value: m.ai_field }
}

fn from_job(m: member_job::Model) -> Preference {
    Preference { id: Some(m.id), member_id: m.member_id, kind: PreferenceKind::Job, value: m.job }
}

#[async_trait::async_trait]
impl PreferenceRepository for SeaOrmPreferenceRepository {
    async fn find_member_by_username(&self, username: &str) -> Result<Option<Member>, ServiceError> {
        let found = member::find_by_username(&self.db, username).await?;
        Ok(found.map(|m| Member { id: m.id, username: m.username }))
    }

    async fn find_preference(&self, kind: PreferenceKind, member_id: Uuid) -> Result<Option<Preference>, ServiceError> {
        let found = match kind {
            PreferenceKind::AiCompany => member_ai::find_by_member(&self.db, member_id).await?.map(from_ai),
            PreferenceKind::AiField => member_ai_field::find_by_member(&self.db, member_id).await?.map(from_ai_field),
            PreferenceKind::Job => member_job::find_by_member(&self.db, member_id).await?.map(from_job),
        };
        Ok(found)
    }

    async fn save_preference(&self, record: Preference) -> Result<Preference, ServiceError> {
        let db = &self.db;
        let saved = match (record.kind, record.id) {
            (PreferenceKind::AiCompany, None) => from_ai(member_ai::create(db, record.member_id, &record.value).await?),
            (PreferenceKind::AiCompany, Some(id)) => from_ai(member_ai::update_value(db, id, &record.value).await?),
            (PreferenceKind::AiField, None) => from_ai_field(member_ai_field::create(db, record.member_id, &record.value).await?),
            (PreferenceKind::AiField, Some(id)) => from_ai_field(member_ai_field::update_value(db, id, &record.value).await?),
            (PreferenceKind::Job, None) => from_job(member_job::create(db, record.member_id, &record.value).await?),
            (PreferenceKind::Job, Some(id)) => from_job(member_job::update_value(db, id, &record.value).await?),
        };
        Ok(saved)
    }
}
