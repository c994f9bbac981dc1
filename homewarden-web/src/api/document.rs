use actix_web::{web, HttpResponse};
use actix_web_validator::{Json, Path};
use homewarden_error::{web::WebError, WebResult};
use homewarden_models::domain::prelude::{NewLinkedDocument, PathId, UpdateLinkedDocument};
use homewarden_repository::DocumentRepository;

use crate::AppState;

pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create))
        .route("/{id}", web::get().to(get_by_id))
        .route("/{id}", web::put().to(update))
        .route("/{id}", web::delete().to(delete));
}

/// `GET /api/documents/{id}`
pub async fn get_by_id(
    path: Path<PathId>,
    state: web::Data<AppState>,
) -> WebResult<HttpResponse> {
    let document = DocumentRepository::find_by_id(&state.db, &path.id)
        .await?
        .ok_or_else(|| WebError::NotFound("Linked document".to_string()))?;
    Ok(HttpResponse::Ok().json(document))
}

/// `POST /api/documents`
pub async fn create(
    payload: Json<NewLinkedDocument>,
    state: web::Data<AppState>,
) -> WebResult<HttpResponse> {
    let document = DocumentRepository::create(&state.db, payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(document))
}

/// `PUT /api/documents/{id}`
pub async fn update(
    path: Path<PathId>,
    payload: Json<UpdateLinkedDocument>,
    state: web::Data<AppState>,
) -> WebResult<HttpResponse> {
    let document = DocumentRepository::update(&state.db, &path.id, payload.into_inner())
        .await?
        .ok_or_else(|| WebError::NotFound("Linked document".to_string()))?;
    Ok(HttpResponse::Ok().json(document))
}

/// `DELETE /api/documents/{id}`
pub async fn delete(path: Path<PathId>, state: web::Data<AppState>) -> WebResult<HttpResponse> {
    if !DocumentRepository::delete(&state.db, &path.id).await? {
        return Err(WebError::NotFound("Linked document".to_string()));
    }
    Ok(HttpResponse::NoContent().finish())
}
