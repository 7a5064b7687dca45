use axum::{
    extract::{Json, Path},
    http::StatusCode,
};
use contracts::system::users::{ChangePasswordDto, CreateUserDto, UpdateUserDto, User};

use crate::errors::Result;
use crate::handlers::list_response;
use crate::system::auth::extractor::CurrentUser;
use crate::system::users::service;

/// GET /api/system/users (admin only)
pub async fn list(CurrentUser(_auth): CurrentUser) -> Result<axum::response::Response> {
    let users = service::list_all().await?;
    Ok(list_response(users))
}

/// GET /api/system/users/:id (admin only)
pub async fn get_by_id(
    CurrentUser(_auth): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<User>> {
    let user = service::get_by_id(&id)
        .await?
        .ok_or_else(|| crate::errors::Error::not_found("user", &id))?;
    Ok(Json(user))
}

/// POST /api/system/users (admin only)
pub async fn create(
    CurrentUser(_auth): CurrentUser,
    Json(dto): Json<CreateUserDto>,
) -> Result<(StatusCode, Json<User>)> {
    let user = service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// PATCH /api/system/users/:id (admin only)
pub async fn update(
    CurrentUser(_auth): CurrentUser,
    Path(id): Path<String>,
    Json(dto): Json<UpdateUserDto>,
) -> Result<Json<User>> {
    let user = service::update(&id, dto).await?;
    Ok(Json(user))
}

/// DELETE /api/system/users/:id (admin only)
pub async fn delete(CurrentUser(_auth): CurrentUser, Path(id): Path<String>) -> Result<StatusCode> {
    service::delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/system/users/:id/change-password
pub async fn change_password(
    CurrentUser(auth): CurrentUser,
    Path(id): Path<String>,
    Json(mut dto): Json<ChangePasswordDto>,
) -> Result<StatusCode> {
    dto.user_id = id;
    service::change_password(dto, &auth.user_id).await?;
    Ok(StatusCode::OK)
}
