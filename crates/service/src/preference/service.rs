use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{Preference, PreferenceKind};
use super::repository::PreferenceRepository;
use crate::errors::ServiceError;

/// Save-or-update and lookup of single-valued member preferences,
/// independent of web framework and storage.
pub struct PreferenceService<R: PreferenceRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: PreferenceRepository + ?Sized> PreferenceService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Store `value` as the member's preference of `kind`, replacing any previous value.
    ///
    /// Fails with [`ServiceError::MemberNotFound`] when `username` has no member record.
    ///
    /// # Examples
    /// ```
    /// use service::preference::{PreferenceKind, PreferenceService, repository::mock::MockPreferenceRepository};
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockPreferenceRepository::default());
    /// repo.add_member("alice");
    /// let svc = PreferenceService::new(repo);
    /// tokio_test::block_on(svc.upsert(PreferenceKind::AiCompany, "alice", "OpenAI")).unwrap();
    /// let saved = tokio_test::block_on(svc.query(PreferenceKind::AiCompany, "alice")).unwrap();
    /// assert_eq!(saved.as_deref(), Some("OpenAI"));
    /// ```
    #[instrument(skip_all, fields(kind = %kind, username = %username))]
    pub async fn upsert(&self, kind: PreferenceKind, username: &str, value: &str) -> Result<Preference, ServiceError> {
        let member = self.repo
            .find_member_by_username(username)
            .await?
            .ok_or_else(|| ServiceError::MemberNotFound(username.to_string()))?;

        let record = match self.repo.find_preference(kind, member.id).await? {
            Some(mut existing) => {
                debug!(record_id = ?existing.id, "existing preference found");
                existing.value = value.to_string();
                existing
            }
            None => Preference::new(kind, member.id, value),
        };

        let created = record.is_new();
        let saved = self.repo.save_preference(record).await?;
        if created {
            info!(member_id = %member.id, record_id = ?saved.id, event = "preference_created", "preference saved");
        } else {
            info!(member_id = %member.id, record_id = ?saved.id, event = "preference_updated", "preference saved");
        }
        Ok(saved)
    }

    /// Current value of the member's preference of `kind`.
    ///
    /// An unknown member is not an error here: it reads as "no value".
    ///
    /// # Examples
    /// ```
    /// use service::preference::{PreferenceKind, PreferenceService, repository::mock::MockPreferenceRepository};
    /// use std::sync::Arc;
    /// let svc = PreferenceService::new(Arc::new(MockPreferenceRepository::default()));
    /// let value = tokio_test::block_on(svc.query(PreferenceKind::Job, "ghost")).unwrap();
    /// assert!(value.is_none());
    /// ```
    #[instrument(skip_all, fields(kind = %kind, username = %username))]
    pub async fn query(&self, kind: PreferenceKind, username: &str) -> Result<Option<String>, ServiceError> {
        let Some(member) = self.repo.find_member_by_username(username).await? else {
            debug!("no member for identity");
            return Ok(None);
        };
        let found = self.repo.find_preference(kind, member.id).await?;
        Ok(found.map(|p| p.value))
    }
}
