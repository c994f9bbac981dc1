//! Router module for all API routes.

mod appliance;
mod contact;
mod document;
mod health;
mod maintenance;

use actix_web::{web, HttpResponse};
use serde_json::json;

/// Configure resource routes mounted under `/api`.
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/appliances").configure(appliance::configure_routes))
        .service(web::scope("/maintenance").configure(maintenance::configure_routes))
        .service(web::scope("/contacts").configure(contact::configure_routes))
        .service(web::scope("/documents").configure(document::configure_routes));
}

/// Configure public root routes (mounted outside `/api`).
pub(crate) fn configure_public_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_health_routes);
}

/// JSON body for unknown routes.
pub(crate) async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "Route not found" }))
}
