use config::{Config, File};
use homewarden_error::HwResult;
use serde::Deserialize;
use std::{ops::Deref, sync::Arc};

#[derive(Debug, Clone)]
pub struct Settings(Arc<Inner>);

impl Deref for Settings {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl Settings {
    /// Load settings from an optional TOML file plus `HW__`-prefixed
    /// environment overrides (e.g. `HW__WEB__PORT=8080`).
    pub fn new(config_path: &str) -> HwResult<Self> {
        let builder = Config::builder()
            .add_source(File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("HW")
                    .separator("__")
                    .try_parsing(true),
            );
        let inner: Inner = builder.build()?.try_deserialize()?;
        Ok(Self(Arc::new(inner)))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Inner {
    #[serde(default)]
    pub web: Web,
    #[serde(default)]
    pub db: Db,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Web {
    #[serde(default = "Web::host_default")]
    pub host: String,
    #[serde(default = "Web::port_default")]
    pub port: u16,
    /// HTTP worker count; actix picks its own default when unset
    #[serde(default)]
    pub workers: Option<usize>,
}

impl Web {
    fn host_default() -> String {
        "0.0.0.0".to_string()
    }

    fn port_default() -> u16 {
        3000
    }
}

impl Default for Web {
    fn default() -> Self {
        Web {
            host: Web::host_default(),
            port: Web::port_default(),
            workers: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Db {
    #[serde(default)]
    pub sqlite: Sqlite,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sqlite {
    #[serde(default = "Sqlite::path_default")]
    pub path: String,
    /// Create the database file when it does not exist
    #[serde(default = "Sqlite::auto_create_default")]
    pub auto_create: bool,
    #[serde(default = "Sqlite::max_connections_default")]
    pub max_connections: u32,
    /// Connect timeout in milliseconds
    #[serde(default = "Sqlite::timeout_default")]
    pub timeout: u64,
    /// Idle timeout in milliseconds
    #[serde(default = "Sqlite::idle_timeout_default")]
    pub idle_timeout: u64,
    /// Maximum connection lifetime in milliseconds
    #[serde(default = "Sqlite::max_lifetime_default")]
    pub max_lifetime: u64,
}

impl Sqlite {
    fn path_default() -> String {
        "homewarden.db".to_string()
    }

    fn auto_create_default() -> bool {
        true
    }

    fn max_connections_default() -> u32 {
        10
    }

    fn timeout_default() -> u64 {
        5_000
    }

    fn idle_timeout_default() -> u64 {
        60_000
    }

    fn max_lifetime_default() -> u64 {
        600_000
    }

    pub fn db_path(&self) -> &str {
        &self.path
    }

    /// SQLite connection URL; `mode=rwc` lets the driver create the file.
    pub fn to_url(&self) -> String {
        if self.auto_create {
            format!("sqlite://{}?mode=rwc", self.path)
        } else {
            format!("sqlite://{}", self.path)
        }
    }
}

impl Default for Sqlite {
    fn default() -> Self {
        Sqlite {
            path: Sqlite::path_default(),
            auto_create: Sqlite::auto_create_default(),
            max_connections: Sqlite::max_connections_default(),
            timeout: Sqlite::timeout_default(),
            idle_timeout: Sqlite::idle_timeout_default(),
            max_lifetime: Sqlite::max_lifetime_default(),
        }
    }
}
