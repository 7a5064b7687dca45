use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a016_purchase_link::aggregate::{
    CreatePurchaseLinkDto, UpdatePurchaseLinkDto,
};

use crate::domain::a016_purchase_link::service;
use crate::errors::{Error, Result};
use crate::handlers::{list_response, parse_id};

/// GET /api/product/:id/purchase-link
pub async fn list_by_product(Path(product_id): Path<String>) -> Result<Response> {
    let product_id = parse_id(&product_id, "product")?;
    let items = service::list_by_product(product_id).await?;
    Ok(list_response(items))
}

/// POST /api/product/:id/purchase-link
pub async fn create(
    Path(product_id): Path<String>,
    Json(dto): Json<CreatePurchaseLinkDto>,
) -> Result<Response> {
    let product_id = parse_id(&product_id, "product")?;
    let item = service::create(product_id, dto).await?;
    Ok((StatusCode::CREATED, Json(item)).into_response())
}

/// GET /api/purchase-link/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Response> {
    let id = parse_id(&id, "purchase link")?;
    let item = service::get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("purchase link", id))?;
    Ok(Json(item).into_response())
}

/// PATCH /api/purchase-link/:id
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<UpdatePurchaseLinkDto>,
) -> Result<Response> {
    let id = parse_id(&id, "purchase link")?;
    let item = service::update(id, dto).await?;
    Ok(Json(item).into_response())
}

/// DELETE /api/purchase-link/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode> {
    let id = parse_id(&id, "purchase link")?;
    service::delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
