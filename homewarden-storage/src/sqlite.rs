use homewarden_error::HwResult;
use homewarden_models::settings::Sqlite;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, Statement};
use std::time::Duration;
use tracing::{info, instrument, log::LevelFilter};

#[instrument(name = "init-sqlite-db", skip_all)]
/// Initialize the SQLite connection pool with auto-creation support.
/// The URL carries `mode=rwc` when auto-creation is enabled.
pub async fn init_db(config: &Sqlite) -> HwResult<DatabaseConnection> {
    let database_url = config.to_url();

    let mut opts = ConnectOptions::new(&database_url);
    opts.connect_timeout(Duration::from_millis(config.timeout))
        .idle_timeout(Duration::from_millis(config.idle_timeout))
        .max_lifetime(Duration::from_millis(config.max_lifetime))
        .max_connections(config.max_connections);

    #[cfg(debug_assertions)]
    {
        opts.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Info);
    }
    #[cfg(not(debug_assertions))]
    {
        opts.sqlx_logging(false)
            .sqlx_logging_level(LevelFilter::Off);
    }

    info!(
        "Connecting to SQLite database at: {} (auto_create: {})",
        config.db_path(),
        config.auto_create
    );

    let db = Database::connect(opts).await?;

    // Parent/child cascade relies on FK enforcement.
    db.execute(Statement::from_string(
        DbBackend::Sqlite,
        "PRAGMA foreign_keys=ON;".to_string(),
    ))
    .await?;

    info!("Successfully connected to SQLite database");

    Ok(db)
}
