use actix_web::{web, HttpResponse};
use actix_web_validator::{Json, Path, Query};
use chrono::Utc;
use homewarden_error::{web::WebError, WebResult};
use homewarden_models::domain::prelude::{
    AppliancePageParams, NewAppliance, PathId, UpdateAppliance,
};
use homewarden_repository::ApplianceRepository;

use crate::AppState;

/// Configure appliance routes
///
/// # Routes
/// - GET `` : paginated listing with search/brand filters
/// - POST `` : create, optionally with child collections
/// - GET `/{id}` : single appliance with children
/// - PUT `/{id}` : partial update with replace-children semantics
/// - DELETE `/{id}` : delete with cascade
/// - GET `/{id}/warranty-status` : derived warranty view
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list))
        .route("", web::post().to(create))
        .route("/{id}", web::get().to(get_by_id))
        .route("/{id}", web::put().to(update))
        .route("/{id}", web::delete().to(delete))
        .route("/{id}/warranty-status", web::get().to(warranty_status));
}

/// `GET /api/appliances`
pub async fn list(
    params: Query<AppliancePageParams>,
    state: web::Data<AppState>,
) -> WebResult<HttpResponse> {
    let result = ApplianceRepository::page(&state.db, params.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// `GET /api/appliances/{id}`
pub async fn get_by_id(
    path: Path<PathId>,
    state: web::Data<AppState>,
) -> WebResult<HttpResponse> {
    let appliance = ApplianceRepository::find_by_id(&state.db, &path.id)
        .await?
        .ok_or_else(|| WebError::NotFound("Appliance".to_string()))?;
    Ok(HttpResponse::Ok().json(appliance))
}

/// `POST /api/appliances`
pub async fn create(
    payload: Json<NewAppliance>,
    state: web::Data<AppState>,
) -> WebResult<HttpResponse> {
    let appliance = ApplianceRepository::create(&state.db, payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(appliance))
}

/// `PUT /api/appliances/{id}`
pub async fn update(
    path: Path<PathId>,
    payload: Json<UpdateAppliance>,
    state: web::Data<AppState>,
) -> WebResult<HttpResponse> {
    let appliance = ApplianceRepository::update(&state.db, &path.id, payload.into_inner())
        .await?
        .ok_or_else(|| WebError::NotFound("Appliance".to_string()))?;
    Ok(HttpResponse::Ok().json(appliance))
}

/// `DELETE /api/appliances/{id}`
pub async fn delete(path: Path<PathId>, state: web::Data<AppState>) -> WebResult<HttpResponse> {
    if !ApplianceRepository::delete(&state.db, &path.id).await? {
        return Err(WebError::NotFound("Appliance".to_string()));
    }
    Ok(HttpResponse::NoContent().finish())
}

/// `GET /api/appliances/{id}/warranty-status`
pub async fn warranty_status(
    path: Path<PathId>,
    state: web::Data<AppState>,
) -> WebResult<HttpResponse> {
    let info = ApplianceRepository::warranty(&state.db, &path.id, Utc::now())
        .await?
        .ok_or_else(|| WebError::NotFound("Appliance".to_string()))?;
    Ok(HttpResponse::Ok().json(info))
}
