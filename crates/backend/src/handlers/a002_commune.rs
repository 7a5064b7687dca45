use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a002_commune::aggregate::{CreateCommuneDto, UpdateCommuneDto};

use crate::domain::a002_commune::service;
use crate::errors::{Error, Result};
use crate::handlers::{list_response, parse_id};

/// GET /api/commune
pub async fn list_all() -> Result<Response> {
    let items = service::list_all().await?;
    Ok(list_response(items))
}

/// GET /api/region/:id/commune
pub async fn list_by_region(Path(region_id): Path<String>) -> Result<Response> {
    let region_id = parse_id(&region_id, "region")?;
    let items = service::list_by_region(region_id).await?;
    Ok(list_response(items))
}

/// GET /api/commune/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Response> {
    let id = parse_id(&id, "commune")?;
    let item = service::get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("commune", id))?;
    Ok(Json(item).into_response())
}

/// POST /api/commune
pub async fn create(Json(dto): Json<CreateCommuneDto>) -> Result<Response> {
    let item = service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(item)).into_response())
}

/// PATCH /api/commune/:id
pub async fn update(Path(id): Path<String>, Json(dto): Json<UpdateCommuneDto>) -> Result<Response> {
    let id = parse_id(&id, "commune")?;
    let item = service::update(id, dto).await?;
    Ok(Json(item).into_response())
}

/// DELETE /api/commune/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode> {
    let id = parse_id(&id, "commune")?;
    service::delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
