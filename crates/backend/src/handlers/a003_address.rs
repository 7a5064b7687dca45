use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a003_address::aggregate::{CreateAddressDto, UpdateAddressDto};

use crate::domain::a003_address::service;
use crate::errors::{Error, Result};
use crate::handlers::{list_response, parse_id};

/// GET /api/address
pub async fn list_all() -> Result<Response> {
    let items = service::list_all().await?;
    Ok(list_response(items))
}

/// GET /api/address/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Response> {
    let id = parse_id(&id, "address")?;
    let item = service::get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("address", id))?;
    Ok(Json(item).into_response())
}

/// GET /api/user/:id/address
pub async fn get_by_user(Path(user_id): Path<String>) -> Result<Response> {
    let item = service::get_by_user(&user_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("user {user_id} has no address")))?;
    Ok(Json(item).into_response())
}

/// POST /api/address
pub async fn create(Json(dto): Json<CreateAddressDto>) -> Result<Response> {
    let item = service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(item)).into_response())
}

/// PATCH /api/address/:id
pub async fn update(Path(id): Path<String>, Json(dto): Json<UpdateAddressDto>) -> Result<Response> {
    let id = parse_id(&id, "address")?;
    let item = service::update(id, dto).await?;
    Ok(Json(item).into_response())
}

/// DELETE /api/address/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode> {
    let id = parse_id(&id, "address")?;
    service::delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
