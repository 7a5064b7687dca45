use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a012_company_type::aggregate::{CreateCompanyTypeDto, UpdateCompanyTypeDto};

use crate::domain::a012_company_type::service;
use crate::errors::{Error, Result};
use crate::handlers::{list_response, parse_id};

/// GET /api/company-type
pub async fn list_all() -> Result<Response> {
    let items = service::list_all().await?;
    Ok(list_response(items))
}

/// GET /api/company-type/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Response> {
    let id = parse_id(&id, "company type")?;
    let item = service::get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("company type", id))?;
    Ok(Json(item).into_response())
}

/// POST /api/company-type
pub async fn create(Json(dto): Json<CreateCompanyTypeDto>) -> Result<Response> {
    let item = service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(item)).into_response())
}

/// PATCH /api/company-type/:id
pub async fn update(Path(id): Path<String>, Json(dto): Json<UpdateCompanyTypeDto>) -> Result<Response> {
    let id = parse_id(&id, "company type")?;
    let item = service::update(id, dto).await?;
    Ok(Json(item).into_response())
}

/// DELETE /api/company-type/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode> {
    let id = parse_id(&id, "company type")?;
    service::delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
