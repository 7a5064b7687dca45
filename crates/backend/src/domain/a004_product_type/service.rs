use contracts::domain::a004_product_type::aggregate::{CreateProductTypeDto, UpdateProductTypeDto, ProductType};
use uuid::Uuid;

use super::repository;
use crate::errors::{Error, Result};
use crate::shared::data::guards;

pub async fn create(dto: CreateProductTypeDto) -> Result<ProductType> {
    let aggregate = ProductType::new_for_insert(dto.name);
    aggregate.validate().map_err(Error::Validation)?;
    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

pub async fn update(id: Uuid, dto: UpdateProductTypeDto) -> Result<ProductType> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("product type", id))?;

    aggregate.apply(&dto);
    aggregate.validate().map_err(Error::Validation)?;
    aggregate.before_write();
    repository::update(&aggregate).await?;
    Ok(aggregate)
}

pub async fn delete(id: Uuid) -> Result<()> {
    guards::ensure_no_dependents(id, &[("a014_product", "product_type_id", "products")]).await?;
    if !repository::delete(id).await? {
        return Err(Error::not_found("product type", id));
    }
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> Result<Option<ProductType>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> Result<Vec<ProductType>> {
    repository::list_all().await
}
