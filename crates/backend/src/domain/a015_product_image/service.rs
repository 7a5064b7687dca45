use contracts::domain::a015_product_image::aggregate::{
    CreateProductImageDto, ProductImage, UpdateProductImageDto,
};
use uuid::Uuid;

use super::repository;
use crate::domain::a014_product::repository as product_repository;
use crate::errors::{Error, Result};

pub async fn create(product_id: Uuid, dto: CreateProductImageDto) -> Result<ProductImage> {
    if !product_repository::exists(product_id).await? {
        return Err(Error::not_found("product", product_id));
    }

    let aggregate =
        ProductImage::new_for_insert(product_id.to_string(), dto.url, dto.alt_text);
    aggregate.validate().map_err(Error::Validation)?;
    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

pub async fn update(id: Uuid, dto: UpdateProductImageDto) -> Result<ProductImage> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("image", id))?;

    aggregate.apply(&dto);
    aggregate.validate().map_err(Error::Validation)?;
    aggregate.before_write();
    repository::update(&aggregate).await?;
    Ok(aggregate)
}

pub async fn delete(id: Uuid) -> Result<()> {
    if !repository::delete(id).await? {
        return Err(Error::not_found("image", id));
    }
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> Result<Option<ProductImage>> {
    repository::get_by_id(id).await
}

pub async fn list_by_product(product_id: Uuid) -> Result<Vec<ProductImage>> {
    if !product_repository::exists(product_id).await? {
        return Err(Error::not_found("product", product_id));
    }
    repository::list_by_product(product_id).await
}
