use contracts::domain::a016_purchase_link::aggregate::{
    CreatePurchaseLinkDto, PurchaseLink, UpdatePurchaseLinkDto,
};
use uuid::Uuid;

use super::repository;
use crate::domain::a014_product::repository as product_repository;
use crate::errors::{Error, Result};

pub async fn create(product_id: Uuid, dto: CreatePurchaseLinkDto) -> Result<PurchaseLink> {
    if !product_repository::exists(product_id).await? {
        return Err(Error::not_found("product", product_id));
    }

    let aggregate = PurchaseLink::new_for_insert(product_id.to_string(), dto.store, dto.url);
    aggregate.validate().map_err(Error::Validation)?;
    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

pub async fn update(id: Uuid, dto: UpdatePurchaseLinkDto) -> Result<PurchaseLink> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("purchase link", id))?;

    aggregate.apply(&dto);
    aggregate.validate().map_err(Error::Validation)?;
    aggregate.before_write();
    repository::update(&aggregate).await?;
    Ok(aggregate)
}

pub async fn delete(id: Uuid) -> Result<()> {
    if !repository::delete(id).await? {
        return Err(Error::not_found("purchase link", id));
    }
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> Result<Option<PurchaseLink>> {
    repository::get_by_id(id).await
}

pub async fn list_by_product(product_id: Uuid) -> Result<Vec<PurchaseLink>> {
    if !product_repository::exists(product_id).await? {
        return Err(Error::not_found("product", product_id));
    }
    repository::list_by_product(product_id).await
}
