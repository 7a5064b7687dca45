use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a006_status::aggregate::{CreateStatusDto, UpdateStatusDto};

use crate::domain::a006_status::service;
use crate::errors::{Error, Result};
use crate::handlers::{list_response, parse_id};

/// GET /api/status
pub async fn list_all() -> Result<Response> {
    let items = service::list_all().await?;
    Ok(list_response(items))
}

/// GET /api/status/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Response> {
    let id = parse_id(&id, "status")?;
    let item = service::get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("status", id))?;
    Ok(Json(item).into_response())
}

/// POST /api/status
pub async fn create(Json(dto): Json<CreateStatusDto>) -> Result<Response> {
    let item = service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(item)).into_response())
}

/// PATCH /api/status/:id
pub async fn update(Path(id): Path<String>, Json(dto): Json<UpdateStatusDto>) -> Result<Response> {
    let id = parse_id(&id, "status")?;
    let item = service::update(id, dto).await?;
    Ok(Json(item).into_response())
}

/// DELETE /api/status/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode> {
    let id = parse_id(&id, "status")?;
    service::delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
