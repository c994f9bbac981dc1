//! Health check endpoint.
//!
//! Registered at the root scope so probes do not depend on the API prefix.

use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde_json::json;

pub(crate) fn configure_health_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
