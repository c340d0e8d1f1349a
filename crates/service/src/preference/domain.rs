use std::fmt;

use uuid::Uuid;

/// Which single-valued preference a record holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKind {
    AiCompany,
    AiField,
    Job,
}

impl PreferenceKind {
    pub const ALL: [PreferenceKind; 3] = [PreferenceKind::AiCompany, PreferenceKind::AiField, PreferenceKind::Job];

    pub fn as_str(self) -> &'static str {
        match self {
            PreferenceKind::AiCompany => "ai_company",
            PreferenceKind::AiField => "ai_field",
            PreferenceKind::Job => "job",
        }
    }
}

impl fmt::Display for PreferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Member as seen by this service (lookup only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: Uuid,
    pub username: String,
}

/// One preference value owned by a member.
///
/// `id` is `None` until the record has been persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preference {
    pub id: Option<Uuid>,
    pub member_id: Uuid,
    pub kind: PreferenceKind,
    pub value: String,
}

impl Preference {
    pub fn new(kind: PreferenceKind, member_id: Uuid, value: impl Into<String>) -> Self {
        Self { id: None, member_id, kind, value: value.into() }
    }

    pub fn is_new(&self) -> bool { self.id.is_none() }
}
