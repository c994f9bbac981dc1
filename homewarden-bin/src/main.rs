mod logging;

use clap::Parser;
use homewarden_error::{HwError, HwResult};
use homewarden_models::settings::Settings;
use std::{env::current_dir, path::PathBuf};
use tracing::info;

const DEFAULT_CONFIG_FILE_NAME: &str = "homewarden.toml";

/// Homewarden - household appliance tracker
///
/// REST API for tracking appliances, their warranty state, maintenance
/// tasks, support contacts and linked documents.
#[derive(Parser)]
#[command(name = "homewarden")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Homewarden API server", long_about = None)]
struct Cli {
    /// Sets a custom config file with full path
    ///
    /// If not specified, the server looks for 'homewarden.toml' in the
    /// current working directory.
    #[arg(short, long, env = "HW_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> HwResult<()> {
    let cli = Cli::parse();

    let _log_guard = logging::init();

    // Determine the configuration file path; the file itself is optional
    // and settings fall back to defaults plus environment overrides.
    let config_path = match cli.config {
        Some(p) => p,
        None => {
            let dir = current_dir()
                .map_err(|e| HwError::from(format!("Failed to get current directory: {e}")))?;
            dir.join(DEFAULT_CONFIG_FILE_NAME)
        }
    };

    let settings = Settings::new(&config_path.to_string_lossy())?;

    let db = homewarden_storage::init(&settings).await?;

    let server = homewarden_web::create_server(&settings, db)?;
    info!("Homewarden API server started");

    server.await.map_err(HwError::from)?;

    Ok(())
}
