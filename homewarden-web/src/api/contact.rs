use actix_web::{web, HttpResponse};
use actix_web_validator::{Json, Path};
use homewarden_error::{web::WebError, WebResult};
use homewarden_models::domain::prelude::{NewSupportContact, PathId, UpdateSupportContact};
use homewarden_repository::ContactRepository;

use crate::AppState;

pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create))
        .route("/{id}", web::get().to(get_by_id))
        .route("/{id}", web::put().to(update))
        .route("/{id}", web::delete().to(delete));
}

/// `GET /api/contacts/{id}`
pub async fn get_by_id(
    path: Path<PathId>,
    state: web::Data<AppState>,
) -> WebResult<HttpResponse> {
    let contact = ContactRepository::find_by_id(&state.db, &path.id)
        .await?
        .ok_or_else(|| WebError::NotFound("Support contact".to_string()))?;
    Ok(HttpResponse::Ok().json(contact))
}

/// `POST /api/contacts`
pub async fn create(
    payload: Json<NewSupportContact>,
    state: web::Data<AppState>,
) -> WebResult<HttpResponse> {
    let contact = ContactRepository::create(&state.db, payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(contact))
}

/// `PUT /api/contacts/{id}`
pub async fn update(
    path: Path<PathId>,
    payload: Json<UpdateSupportContact>,
    state: web::Data<AppState>,
) -> WebResult<HttpResponse> {
    let contact = ContactRepository::update(&state.db, &path.id, payload.into_inner())
        .await?
        .ok_or_else(|| WebError::NotFound("Support contact".to_string()))?;
    Ok(HttpResponse::Ok().json(contact))
}

/// `DELETE /api/contacts/{id}`
pub async fn delete(path: Path<PathId>, state: web::Data<AppState>) -> WebResult<HttpResponse> {
    if !ContactRepository::delete(&state.db, &path.id).await? {
        return Err(WebError::NotFound("Support contact".to_string()));
    }
    Ok(HttpResponse::NoContent().finish())
}
