
/// Preference table CRUD and uniqueness tests
pub mod preference_tests;

use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

use crate::db::connect;

// Migrations run once per test process; `false` means the database was unreachable.
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

/// Connect and migrate; `None` when DB tests are disabled or the database is unreachable.
pub(crate) async fn setup_test_db() -> Result<Option<DatabaseConnection>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(None);
    }
    let migrated = *MIGRATED
        .get_or_init(|| async {
            match connect().await {
                Ok(db) => migration::Migrator::up(&db, None).await.is_ok(),
                Err(e) => {
                    eprintln!("skip: cannot connect to db: {}", e);
                    false
                }
            }
        })
        .await;
    if !migrated {
        return Ok(None);
    }
    // Fresh connection bound to the current test's runtime
    Ok(Some(connect().await?))
}
