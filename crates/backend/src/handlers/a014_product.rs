use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a014_product::aggregate::{CreateProductDto, UpdateProductDto};

use crate::domain::a014_product::service;
use crate::errors::{Error, Result};
use crate::handlers::{list_response, parse_id};

/// GET /api/product
pub async fn list_all() -> Result<Response> {
    let items = service::list_all().await?;
    Ok(list_response(items))
}

/// GET /api/product/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Response> {
    let id = parse_id(&id, "product")?;
    let item = service::get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("product", id))?;
    Ok(Json(item).into_response())
}

/// POST /api/product
pub async fn create(Json(dto): Json<CreateProductDto>) -> Result<Response> {
    let item = service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(item)).into_response())
}

/// PATCH /api/product/:id
pub async fn update(Path(id): Path<String>, Json(dto): Json<UpdateProductDto>) -> Result<Response> {
    let id = parse_id(&id, "product")?;
    let item = service::update(id, dto).await?;
    Ok(Json(item).into_response())
}

/// DELETE /api/product/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode> {
    let id = parse_id(&id, "product")?;
    service::delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Bridge routes: one pair of path params, POST links, DELETE unlinks.
// ---------------------------------------------------------------------------

fn link_status(created: bool) -> StatusCode {
    if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    }
}

/// GET /api/product/:id/genre
pub async fn list_genres(Path(id): Path<String>) -> Result<Response> {
    let id = parse_id(&id, "product")?;
    Ok(list_response(service::genres(id).await?))
}

/// GET /api/genre/:id/product
pub async fn list_by_genre(Path(genre_id): Path<String>) -> Result<Response> {
    let genre_id = parse_id(&genre_id, "genre")?;
    Ok(list_response(service::list_by_genre(genre_id).await?))
}

/// GET /api/platform/:id/product
pub async fn list_by_platform(Path(platform_id): Path<String>) -> Result<Response> {
    let platform_id = parse_id(&platform_id, "platform")?;
    Ok(list_response(service::list_by_platform(platform_id).await?))
}

/// POST /api/product/:id/genre/:genre_id
pub async fn add_genre(Path((id, genre_id)): Path<(String, String)>) -> Result<StatusCode> {
    let id = parse_id(&id, "product")?;
    let genre_id = parse_id(&genre_id, "genre")?;
    Ok(link_status(service::add_genre(id, genre_id).await?))
}

/// DELETE /api/product/:id/genre/:genre_id
pub async fn remove_genre(Path((id, genre_id)): Path<(String, String)>) -> Result<StatusCode> {
    let id = parse_id(&id, "product")?;
    let genre_id = parse_id(&genre_id, "genre")?;
    service::remove_genre(id, genre_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/product/:id/platform
pub async fn list_platforms(Path(id): Path<String>) -> Result<Response> {
    let id = parse_id(&id, "product")?;
    Ok(list_response(service::platforms(id).await?))
}

/// POST /api/product/:id/platform/:platform_id
pub async fn add_platform(Path((id, platform_id)): Path<(String, String)>) -> Result<StatusCode> {
    let id = parse_id(&id, "product")?;
    let platform_id = parse_id(&platform_id, "platform")?;
    Ok(link_status(service::add_platform(id, platform_id).await?))
}

/// DELETE /api/product/:id/platform/:platform_id
pub async fn remove_platform(
    Path((id, platform_id)): Path<(String, String)>,
) -> Result<StatusCode> {
    let id = parse_id(&id, "product")?;
    let platform_id = parse_id(&platform_id, "platform")?;
    service::remove_platform(id, platform_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/product/:id/developer
pub async fn list_developers(Path(id): Path<String>) -> Result<Response> {
    let id = parse_id(&id, "product")?;
    Ok(list_response(service::developers(id).await?))
}

/// POST /api/product/:id/developer/:developer_id
pub async fn add_developer(Path((id, developer_id)): Path<(String, String)>) -> Result<StatusCode> {
    let id = parse_id(&id, "product")?;
    let developer_id = parse_id(&developer_id, "developer")?;
    Ok(link_status(service::add_developer(id, developer_id).await?))
}

/// DELETE /api/product/:id/developer/:developer_id
pub async fn remove_developer(
    Path((id, developer_id)): Path<(String, String)>,
) -> Result<StatusCode> {
    let id = parse_id(&id, "product")?;
    let developer_id = parse_id(&developer_id, "developer")?;
    service::remove_developer(id, developer_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/product/:id/company
pub async fn list_companies(Path(id): Path<String>) -> Result<Response> {
    let id = parse_id(&id, "product")?;
    Ok(list_response(service::companies(id).await?))
}

/// POST /api/product/:id/company/:company_id
pub async fn add_company(Path((id, company_id)): Path<(String, String)>) -> Result<StatusCode> {
    let id = parse_id(&id, "product")?;
    let company_id = parse_id(&company_id, "company")?;
    Ok(link_status(service::add_company(id, company_id).await?))
}

/// DELETE /api/product/:id/company/:company_id
pub async fn remove_company(Path((id, company_id)): Path<(String, String)>) -> Result<StatusCode> {
    let id = parse_id(&id, "product")?;
    let company_id = parse_id(&company_id, "company")?;
    service::remove_company(id, company_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
