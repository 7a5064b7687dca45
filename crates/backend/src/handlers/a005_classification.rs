use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a005_classification::aggregate::{CreateClassificationDto, UpdateClassificationDto};

use crate::domain::a005_classification::service;
use crate::errors::{Error, Result};
use crate::handlers::{list_response, parse_id};

/// GET /api/classification
pub async fn list_all() -> Result<Response> {
    let items = service::list_all().await?;
    Ok(list_response(items))
}

/// GET /api/classification/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Response> {
    let id = parse_id(&id, "classification")?;
    let item = service::get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("classification", id))?;
    Ok(Json(item).into_response())
}

/// POST /api/classification
pub async fn create(Json(dto): Json<CreateClassificationDto>) -> Result<Response> {
    let item = service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(item)).into_response())
}

/// PATCH /api/classification/:id
pub async fn update(Path(id): Path<String>, Json(dto): Json<UpdateClassificationDto>) -> Result<Response> {
    let id = parse_id(&id, "classification")?;
    let item = service::update(id, dto).await?;
    Ok(Json(item).into_response())
}

/// DELETE /api/classification/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode> {
    let id = parse_id(&id, "classification")?;
    service::delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
