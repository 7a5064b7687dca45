use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a010_developer_type::aggregate::{CreateDeveloperTypeDto, UpdateDeveloperTypeDto};

use crate::domain::a010_developer_type::service;
use crate::errors::{Error, Result};
use crate::handlers::{list_response, parse_id};

/// GET /api/developer-type
pub async fn list_all() -> Result<Response> {
    let items = service::list_all().await?;
    Ok(list_response(items))
}

/// GET /api/developer-type/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Response> {
    let id = parse_id(&id, "developer type")?;
    let item = service::get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("developer type", id))?;
    Ok(Json(item).into_response())
}

/// POST /api/developer-type
pub async fn create(Json(dto): Json<CreateDeveloperTypeDto>) -> Result<Response> {
    let item = service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(item)).into_response())
}

/// PATCH /api/developer-type/:id
pub async fn update(Path(id): Path<String>, Json(dto): Json<UpdateDeveloperTypeDto>) -> Result<Response> {
    let id = parse_id(&id, "developer type")?;
    let item = service::update(id, dto).await?;
    Ok(Json(item).into_response())
}

/// DELETE /api/developer-type/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode> {
    let id = parse_id(&id, "developer type")?;
    service::delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
