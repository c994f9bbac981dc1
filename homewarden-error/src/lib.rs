pub mod storage;
pub mod web;

use anyhow::Error as AnyhowError;
use config::ConfigError;
use sea_orm::DbErr;
use std::io::Error as IoError;
use storage::StorageError;
use thiserror::Error;
use web::WebError;

pub type HwResult<T, E = HwError> = anyhow::Result<T, E>;
pub type WebResult<T, E = WebError> = anyhow::Result<T, E>;
pub type StorageResult<T, E = StorageError> = Result<T, E>;

/// Top-level application error. Layer-specific errors fold into this at the
/// binary boundary.
#[derive(Error, Debug)]
pub enum HwError {
    #[error("{0}")]
    Msg(String),
    #[error("{0}")]
    IoError(#[from] IoError),
    #[error("{0}")]
    Anyhow(#[from] AnyhowError),
    #[error("{0}")]
    ConfigError(#[from] ConfigError),
    #[error("{0}")]
    StorageError(#[from] StorageError),
    #[error("{0}")]
    WebError(#[from] WebError),
}

impl From<String> for HwError {
    #[inline]
    fn from(e: String) -> Self {
        HwError::Msg(e)
    }
}

impl From<&str> for HwError {
    #[inline]
    fn from(e: &str) -> Self {
        HwError::Msg(e.to_string())
    }
}

impl From<DbErr> for HwError {
    #[inline]
    fn from(e: DbErr) -> Self {
        HwError::StorageError(StorageError::DBError(e))
    }
}
