use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a017_payment_method::aggregate::{CreatePaymentMethodDto, UpdatePaymentMethodDto};

use crate::domain::a017_payment_method::service;
use crate::errors::{Error, Result};
use crate::handlers::{list_response, parse_id};

/// GET /api/payment-method
pub async fn list_all() -> Result<Response> {
    let items = service::list_all().await?;
    Ok(list_response(items))
}

/// GET /api/payment-method/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Response> {
    let id = parse_id(&id, "payment method")?;
    let item = service::get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("payment method", id))?;
    Ok(Json(item).into_response())
}

/// POST /api/payment-method
pub async fn create(Json(dto): Json<CreatePaymentMethodDto>) -> Result<Response> {
    let item = service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(item)).into_response())
}

/// PATCH /api/payment-method/:id
pub async fn update(Path(id): Path<String>, Json(dto): Json<UpdatePaymentMethodDto>) -> Result<Response> {
    let id = parse_id(&id, "payment method")?;
    let item = service::update(id, dto).await?;
    Ok(Json(item).into_response())
}

/// DELETE /api/payment-method/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode> {
    let id = parse_id(&id, "payment method")?;
    service::delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
