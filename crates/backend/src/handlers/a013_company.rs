use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a013_company::aggregate::{CreateCompanyDto, UpdateCompanyDto};

use crate::domain::a013_company::service;
use crate::errors::{Error, Result};
use crate::handlers::{list_response, parse_id};

/// GET /api/company
pub async fn list_all() -> Result<Response> {
    let items = service::list_all().await?;
    Ok(list_response(items))
}

/// GET /api/company/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Response> {
    let id = parse_id(&id, "company")?;
    let item = service::get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("company", id))?;
    Ok(Json(item).into_response())
}

/// POST /api/company
pub async fn create(Json(dto): Json<CreateCompanyDto>) -> Result<Response> {
    let item = service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(item)).into_response())
}

/// PATCH /api/company/:id
pub async fn update(Path(id): Path<String>, Json(dto): Json<UpdateCompanyDto>) -> Result<Response> {
    let id = parse_id(&id, "company")?;
    let item = service::update(id, dto).await?;
    Ok(Json(item).into_response())
}

/// DELETE /api/company/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode> {
    let id = parse_id(&id, "company")?;
    service::delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/company/:id/type
pub async fn list_types(Path(id): Path<String>) -> Result<Response> {
    let id = parse_id(&id, "company")?;
    let items = service::types(id).await?;
    Ok(list_response(items))
}

/// POST /api/company/:id/type/:type_id
pub async fn add_type(Path((id, type_id)): Path<(String, String)>) -> Result<StatusCode> {
    let id = parse_id(&id, "company")?;
    let type_id = parse_id(&type_id, "company type")?;
    let created = service::add_type(id, type_id).await?;
    Ok(if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    })
}

/// DELETE /api/company/:id/type/:type_id
pub async fn remove_type(Path((id, type_id)): Path<(String, String)>) -> Result<StatusCode> {
    let id = parse_id(&id, "company")?;
    let type_id = parse_id(&type_id, "company type")?;
    service::remove_type(id, type_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
