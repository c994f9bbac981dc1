mod migration;
mod sqlite;

pub use migration::Migrator;
pub use sea_orm_migration::MigratorTrait;

use homewarden_error::{HwError, HwResult};
use homewarden_models::settings::Settings;
use sea_orm::DatabaseConnection;
use tracing::{info, instrument};

/// Connect to the store and bring the schema up to date.
///
/// The returned handle is passed down explicitly through the application;
/// there is no process-wide connection state.
#[instrument(name = "init-storage", skip_all)]
pub async fn init(settings: &Settings) -> HwResult<DatabaseConnection> {
    let db = sqlite::init_db(&settings.db.sqlite).await?;

    Migrator::up(&db, None).await.map_err(HwError::from)?;

    info!("Storage initialized successfully");
    Ok(db)
}
