use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a020_sale::aggregate::{CreateSaleDto, SaleView, UpdateSaleDto};

use crate::domain::a020_sale::service;
use crate::errors::{Error, Result};
use crate::handlers::{list_response, parse_id};
use crate::system::auth::extractor::CurrentUser;

/// POST /api/sale — checkout for the session user.
pub async fn create(
    CurrentUser(auth): CurrentUser,
    Json(dto): Json<CreateSaleDto>,
) -> Result<Response> {
    let sale = service::create(&auth, dto).await?;
    Ok((StatusCode::CREATED, Json(SaleView::from(&sale))).into_response())
}

/// GET /api/sale (admin only)
pub async fn list_all() -> Result<Response> {
    let views: Vec<SaleView> = service::list_all().await?.iter().map(SaleView::from).collect();
    Ok(list_response(views))
}

/// GET /api/sale/mine — the session user's purchase history.
pub async fn list_mine(CurrentUser(auth): CurrentUser) -> Result<Response> {
    let views: Vec<SaleView> = service::list_for_user(&auth)
        .await?
        .iter()
        .map(SaleView::from)
        .collect();
    Ok(list_response(views))
}

/// GET /api/sale/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Response> {
    let id = parse_id(&id, "sale")?;
    let sale = service::get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("sale", id))?;
    Ok(Json(SaleView::from(&sale)).into_response())
}

/// PATCH /api/sale/:id (admin only) — header references only.
pub async fn update(Path(id): Path<String>, Json(dto): Json<UpdateSaleDto>) -> Result<Response> {
    let id = parse_id(&id, "sale")?;
    let sale = service::update(id, dto).await?;
    Ok(Json(SaleView::from(&sale)).into_response())
}

/// DELETE /api/sale/:id (admin only)
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode> {
    let id = parse_id(&id, "sale")?;
    service::delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
