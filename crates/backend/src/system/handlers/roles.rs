use axum::{
    extract::{Json, Path},
    http::StatusCode,
};
use contracts::system::roles::{CreateRoleDto, Role, UpdateRoleDto};

use crate::errors::Result;
use crate::handlers::list_response;
use crate::system::auth::extractor::CurrentUser;
use crate::system::roles::service;

/// GET /api/system/roles (admin only)
pub async fn list(CurrentUser(_auth): CurrentUser) -> Result<axum::response::Response> {
    let roles = service::list_all().await?;
    Ok(list_response(roles))
}

/// GET /api/system/roles/:id (admin only)
pub async fn get_by_id(
    CurrentUser(_auth): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<Role>> {
    let role = service::get_by_id(&id)
        .await?
        .ok_or_else(|| crate::errors::Error::not_found("role", &id))?;
    Ok(Json(role))
}

/// POST /api/system/roles (admin only)
pub async fn create(
    CurrentUser(_auth): CurrentUser,
    Json(dto): Json<CreateRoleDto>,
) -> Result<(StatusCode, Json<Role>)> {
    let role = service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(role)))
}

/// PATCH /api/system/roles/:id (admin only)
pub async fn update(
    CurrentUser(_auth): CurrentUser,
    Path(id): Path<String>,
    Json(dto): Json<UpdateRoleDto>,
) -> Result<Json<Role>> {
    let role = service::update(&id, dto).await?;
    Ok(Json(role))
}

/// DELETE /api/system/roles/:id (admin only)
pub async fn delete(CurrentUser(_auth): CurrentUser, Path(id): Path<String>) -> Result<StatusCode> {
    service::delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
