use actix_web::{web, HttpResponse};
use actix_web_validator::{Json, Path, Query};
use homewarden_error::{web::WebError, WebResult};
use homewarden_models::domain::prelude::{
    MaintenancePageParams, NewMaintenanceTask, PathId, UpdateMaintenanceTask,
};
use homewarden_repository::MaintenanceRepository;

use crate::AppState;

/// Configure maintenance task routes
///
/// # Routes
/// - GET `` : paginated listing with appliance/status/due-soon filters
/// - POST `` : create a task under an appliance
/// - GET `/appliances/{id}` : all tasks of one appliance
/// - GET `/{id}` : single task
/// - PUT `/{id}` : partial update
/// - DELETE `/{id}` : delete
/// - PATCH `/{id}/complete` : mark completed now
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list))
        .route("", web::post().to(create))
        .route("/appliances/{id}", web::get().to(by_appliance))
        .route("/{id}", web::get().to(get_by_id))
        .route("/{id}", web::put().to(update))
        .route("/{id}", web::delete().to(delete))
        .route("/{id}/complete", web::patch().to(complete));
}

/// `GET /api/maintenance`
pub async fn list(
    params: Query<MaintenancePageParams>,
    state: web::Data<AppState>,
) -> WebResult<HttpResponse> {
    let result = MaintenanceRepository::page(&state.db, params.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// `GET /api/maintenance/{id}`
pub async fn get_by_id(
    path: Path<PathId>,
    state: web::Data<AppState>,
) -> WebResult<HttpResponse> {
    let task = MaintenanceRepository::find_by_id(&state.db, &path.id)
        .await?
        .ok_or_else(|| WebError::NotFound("Maintenance task".to_string()))?;
    Ok(HttpResponse::Ok().json(task))
}

/// `GET /api/maintenance/appliances/{id}`
pub async fn by_appliance(
    path: Path<PathId>,
    state: web::Data<AppState>,
) -> WebResult<HttpResponse> {
    let tasks = MaintenanceRepository::find_by_appliance(&state.db, &path.id).await?;
    Ok(HttpResponse::Ok().json(tasks))
}

/// `POST /api/maintenance`
pub async fn create(
    payload: Json<NewMaintenanceTask>,
    state: web::Data<AppState>,
) -> WebResult<HttpResponse> {
    let task = MaintenanceRepository::create(&state.db, payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(task))
}

/// `PUT /api/maintenance/{id}`
pub async fn update(
    path: Path<PathId>,
    payload: Json<UpdateMaintenanceTask>,
    state: web::Data<AppState>,
) -> WebResult<HttpResponse> {
    let task = MaintenanceRepository::update(&state.db, &path.id, payload.into_inner())
        .await?
        .ok_or_else(|| WebError::NotFound("Maintenance task".to_string()))?;
    Ok(HttpResponse::Ok().json(task))
}

/// `DELETE /api/maintenance/{id}`
pub async fn delete(path: Path<PathId>, state: web::Data<AppState>) -> WebResult<HttpResponse> {
    if !MaintenanceRepository::delete(&state.db, &path.id).await? {
        return Err(WebError::NotFound("Maintenance task".to_string()));
    }
    Ok(HttpResponse::NoContent().finish())
}

/// `PATCH /api/maintenance/{id}/complete`
pub async fn complete(path: Path<PathId>, state: web::Data<AppState>) -> WebResult<HttpResponse> {
    let task = MaintenanceRepository::complete(&state.db, &path.id)
        .await?
        .ok_or_else(|| WebError::NotFound("Maintenance task".to_string()))?;
    Ok(HttpResponse::Ok().json(task))
}
