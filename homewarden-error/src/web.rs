use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::storage::StorageError;

/// One failed validation rule, addressed by its wire-format field path
/// (e.g. `name` or `maintenanceTasks[0].taskName`).
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum WebError {
    #[error("BadRequest: `{0}`")]
    BadRequest(String),
    #[error("Validation failed")]
    Validation(Vec<FieldError>),
    #[error("`{0}` not found")]
    NotFound(String),
    #[error("InternalError: `{0}`")]
    InternalError(String),
    #[error("StorageError: `{0}`")]
    StorageError(#[from] StorageError),
}

impl From<std::io::Error> for WebError {
    fn from(e: std::io::Error) -> Self {
        WebError::InternalError(e.to_string())
    }
}

impl ResponseError for WebError {
    fn status_code(&self) -> StatusCode {
        match self {
            WebError::BadRequest(_) | WebError::Validation(_) => StatusCode::BAD_REQUEST,
            WebError::NotFound(_) => StatusCode::NOT_FOUND,
            WebError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            WebError::StorageError(e) => match e {
                StorageError::StorageUnavailable => StatusCode::SERVICE_UNAVAILABLE,
                StorageError::EntityNotFound(_) => StatusCode::NOT_FOUND,
                StorageError::DBError(DbErr::Conn(_) | DbErr::ConnectionAcquire(_)) => {
                    StatusCode::SERVICE_UNAVAILABLE
                }
                StorageError::DBError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            WebError::BadRequest(msg) => {
                HttpResponse::BadRequest().json(json!({ "error": msg }))
            }
            WebError::Validation(details) => HttpResponse::BadRequest().json(json!({
                "error": "Validation failed",
                "details": details,
            })),
            WebError::NotFound(what) => {
                HttpResponse::NotFound().json(json!({ "error": format!("{what} not found") }))
            }
            WebError::InternalError(msg) => {
                error!(error = %msg, "unhandled error");
                HttpResponse::InternalServerError().json(internal_body(msg))
            }
            WebError::StorageError(e) => match e {
                StorageError::StorageUnavailable
                | StorageError::DBError(DbErr::Conn(_) | DbErr::ConnectionAcquire(_)) => {
                    error!(error = %e, "storage unavailable");
                    HttpResponse::ServiceUnavailable().json(json!({
                        "error": "Database connection failed",
                        "message": "Service temporarily unavailable",
                    }))
                }
                StorageError::EntityNotFound(what) => HttpResponse::NotFound()
                    .json(json!({ "error": format!("{what} not found") })),
                StorageError::DBError(db_err) => {
                    error!(error = %db_err, "database error");
                    HttpResponse::InternalServerError().json(internal_body(&db_err.to_string()))
                }
            },
        }
    }
}

/// Generic 500 body; the underlying message is exposed only in debug builds.
fn internal_body(detail: &str) -> serde_json::Value {
    #[cfg(debug_assertions)]
    {
        json!({ "error": "Internal server error", "detail": detail })
    }
    #[cfg(not(debug_assertions))]
    {
        let _ = detail;
        json!({ "error": "Internal server error" })
    }
}
