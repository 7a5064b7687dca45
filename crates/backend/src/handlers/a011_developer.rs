use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a011_developer::aggregate::{CreateDeveloperDto, UpdateDeveloperDto};

use crate::domain::a011_developer::service;
use crate::errors::{Error, Result};
use crate::handlers::{list_response, parse_id};

/// GET /api/developer
pub async fn list_all() -> Result<Response> {
    let items = service::list_all().await?;
    Ok(list_response(items))
}

/// GET /api/developer/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Response> {
    let id = parse_id(&id, "developer")?;
    let item = service::get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("developer", id))?;
    Ok(Json(item).into_response())
}

/// POST /api/developer
pub async fn create(Json(dto): Json<CreateDeveloperDto>) -> Result<Response> {
    let item = service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(item)).into_response())
}

/// PATCH /api/developer/:id
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<UpdateDeveloperDto>,
) -> Result<Response> {
    let id = parse_id(&id, "developer")?;
    let item = service::update(id, dto).await?;
    Ok(Json(item).into_response())
}

/// DELETE /api/developer/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode> {
    let id = parse_id(&id, "developer")?;
    service::delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/developer/:id/type
pub async fn list_types(Path(id): Path<String>) -> Result<Response> {
    let id = parse_id(&id, "developer")?;
    let items = service::types(id).await?;
    Ok(list_response(items))
}

/// POST /api/developer/:id/type/:type_id
pub async fn add_type(Path((id, type_id)): Path<(String, String)>) -> Result<StatusCode> {
    let id = parse_id(&id, "developer")?;
    let type_id = parse_id(&type_id, "developer type")?;
    let created = service::add_type(id, type_id).await?;
    Ok(if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    })
}

/// DELETE /api/developer/:id/type/:type_id
pub async fn remove_type(Path((id, type_id)): Path<(String, String)>) -> Result<StatusCode> {
    let id = parse_id(&id, "developer")?;
    let type_id = parse_id(&type_id, "developer type")?;
    service::remove_type(id, type_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
