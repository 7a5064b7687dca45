use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a015_product_image::aggregate::{
    CreateProductImageDto, UpdateProductImageDto,
};

use crate::domain::a015_product_image::service;
use crate::errors::{Error, Result};
use crate::handlers::{list_response, parse_id};

/// GET /api/product/:id/image
pub async fn list_by_product(Path(product_id): Path<String>) -> Result<Response> {
    let product_id = parse_id(&product_id, "product")?;
    let items = service::list_by_product(product_id).await?;
    Ok(list_response(items))
}

/// POST /api/product/:id/image
pub async fn create(
    Path(product_id): Path<String>,
    Json(dto): Json<CreateProductImageDto>,
) -> Result<Response> {
    let product_id = parse_id(&product_id, "product")?;
    let item = service::create(product_id, dto).await?;
    Ok((StatusCode::CREATED, Json(item)).into_response())
}

/// GET /api/image/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Response> {
    let id = parse_id(&id, "image")?;
    let item = service::get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("image", id))?;
    Ok(Json(item).into_response())
}

/// PATCH /api/image/:id
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<UpdateProductImageDto>,
) -> Result<Response> {
    let id = parse_id(&id, "image")?;
    let item = service::update(id, dto).await?;
    Ok(Json(item).into_response())
}

/// DELETE /api/image/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode> {
    let id = parse_id(&id, "image")?;
    service::delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
