use async_trait::async_trait;
use uuid::Uuid;

use super::domain::{Member, Preference, PreferenceKind};
use crate::errors::ServiceError;

/// Persistence collaborator for member lookup and preference records.
#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    async fn find_member_by_username(&self, username: &str) -> Result<Option<Member>, ServiceError>;

    async fn find_preference(&self, kind: PreferenceKind, member_id: Uuid) -> Result<Option<Preference>, ServiceError>;
    /// Insert when `record.id` is `None`, otherwise update the stored value.
    async fn save_preference(&self, record: Preference) -> Result<Preference, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    pub struct MockPreferenceRepository {
        members: Mutex<HashMap<String, Member>>, // key: username
        records: Mutex<Vec<Preference>>,
    }

    fn lock<T>(m: &Mutex<T>) -> Result<MutexGuard<'_, T>, ServiceError> {
        m.lock().map_err(|_| ServiceError::Db("mock repository lock poisoned".into()))
    }

    impl MockPreferenceRepository {
        /// Register a member the way the account service would.
        pub fn add_member(&self, username: &str) -> Member {
            let mut members = self.members.lock().unwrap_or_else(|e| e.into_inner());
            members
                .entry(username.to_string())
                .or_insert_with(|| Member { id: Uuid::new_v4(), username: username.to_string() })
                .clone()
        }

        /// Number of stored records for (kind, member); more than one means duplicates.
        pub fn record_count(&self, kind: PreferenceKind, member_id: Uuid) -> usize {
            let records = self.records.lock().unwrap_or_else(|e| e.into_inner());
            records.iter().filter(|r| r.kind == kind && r.member_id == member_id).count()
        }
    }

    #[async_trait]
    impl PreferenceRepository for MockPreferenceRepository {
        async fn find_member_by_username(&self, username: &str) -> Result<Option<Member>, ServiceError> {
            let members = lock(&self.members)?;
            Ok(members.get(username).cloned())
        }

        async fn find_preference(&self, kind: PreferenceKind, member_id: Uuid) -> Result<Option<Preference>, ServiceError> {
            let records = lock(&self.records)?;
            Ok(records.iter().find(|r| r.kind == kind && r.member_id == member_id).cloned())
        }

        async fn save_preference(&self, mut record: Preference) -> Result<Preference, ServiceError> {
            let mut records = lock(&self.records)?;
            match record.id {
                None => {
                    record.id = Some(Uuid::new_v4());
                    records.push(record.clone());
                }
                Some(id) => {
                    let slot = records
                        .iter_mut()
                        .find(|r| r.id == Some(id))
                        .ok_or_else(|| ServiceError::Db(format!("{} record {id} missing", record.kind)))?;
                    slot.value = record.value.clone();
                }
            }
            Ok(record)
        }
    }
}
