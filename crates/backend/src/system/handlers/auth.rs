use axum::{extract::Json, http::StatusCode};
use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};

use crate::errors::{Error, Result};
use crate::system::auth::extractor::CurrentUser;
use crate::system::auth::session;
use crate::system::roles::repository as roles_repository;
use crate::system::users::service as user_service;

/// POST /api/system/auth/login
pub async fn login(Json(request): Json<LoginRequest>) -> Result<Json<LoginResponse>> {
    let user = user_service::verify_credentials(&request.username, &request.password)
        .await?
        .ok_or_else(|| Error::Unauthorized("invalid username or password".into()))?;

    let token = session::create_session(&user.id).await?;

    let role = roles_repository::get_by_id(&user.role_id)
        .await?
        .map(|role| role.name)
        .unwrap_or_default();

    Ok(Json(LoginResponse {
        token,
        user: UserInfo {
            id: user.id,
            username: user.username,
            full_name: user.full_name,
            email: user.email,
            role,
        },
    }))
}

/// POST /api/system/auth/logout
pub async fn logout(headers: axum::http::HeaderMap) -> Result<StatusCode> {
    let token = headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or_else(|| Error::Unauthorized("missing bearer token".into()))?;

    session::revoke_session(token).await?;
    Ok(StatusCode::OK)
}

/// GET /api/system/auth/me (protected by middleware)
pub async fn current_user(CurrentUser(auth): CurrentUser) -> Result<Json<UserInfo>> {
    let user = user_service::get_by_id(&auth.user_id)
        .await?
        .ok_or_else(|| Error::not_found("user", &auth.user_id))?;

    Ok(Json(UserInfo {
        id: user.id,
        username: user.username,
        full_name: user.full_name,
        email: user.email,
        role: auth.role,
    }))
}
