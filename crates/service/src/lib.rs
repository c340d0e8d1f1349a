//! Service layer for member preferences.
//! - Keeps the save-or-update policy independent of the web framework.
//! - Persistence sits behind `PreferenceRepository` (SeaORM or in-memory).

pub mod errors;
pub mod preference;
#[cfg(all(test, feature = "seaorm"))]
pub mod test_support;
