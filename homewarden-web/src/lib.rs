//! Web server module for the homewarden API.

mod api;
mod validation;

use actix_web::{
    dev::Server,
    middleware::{Logger, NormalizePath},
    web::{self, Data},
    App, HttpServer,
};
use homewarden_error::{HwError, HwResult};
use homewarden_models::settings::Settings;
use sea_orm::DatabaseConnection;
use tracing::{info, instrument};

/// Shared application state; the storage handle is passed down explicitly.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

/// Assemble routes, extractor configs and the JSON 404 fallback for one app
/// instance. Shared by the server factory and the test harness; the caller
/// registers `AppState` itself.
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        actix_web_validator::JsonConfig::default().error_handler(validation::json_error_handler),
    )
    .app_data(
        actix_web_validator::QueryConfig::default()
            .error_handler(validation::query_error_handler),
    )
    .app_data(
        actix_web_validator::PathConfig::default().error_handler(validation::path_error_handler),
    )
    .configure(api::configure_public_routes)
    .service(web::scope("/api").configure(api::configure_routes))
    .default_service(web::route().to(api::not_found));
}

/// Create and configure the HTTP server.
#[instrument(name = "create-server", skip_all)]
pub fn create_server(settings: &Settings, db: DatabaseConnection) -> HwResult<Server> {
    let addr = format!("{}:{}", settings.web.host, settings.web.port);
    let state = AppState { db };

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(NormalizePath::trim())
            .configure(configure_app)
    });

    if let Some(workers) = settings.web.workers {
        server = server.workers(workers);
    }

    let server = server
        .bind(&addr)
        .map_err(|e| HwError::from(format!("Failed to bind HTTP server to {addr}: {e}")))?;

    info!("HTTP server listening on {addr}");
    Ok(server.run())
}
