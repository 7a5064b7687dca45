use contracts::domain::a018_shipping_method::aggregate::{CreateShippingMethodDto, UpdateShippingMethodDto, ShippingMethod};
use uuid::Uuid;

use super::repository;
use crate::errors::{Error, Result};
use crate::shared::data::guards;

pub async fn create(dto: CreateShippingMethodDto) -> Result<ShippingMethod> {
    let aggregate = ShippingMethod::new_for_insert(dto.name);
    aggregate.validate().map_err(Error::Validation)?;
    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

pub async fn update(id: Uuid, dto: UpdateShippingMethodDto) -> Result<ShippingMethod> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("shipping method", id))?;

    aggregate.apply(&dto);
    aggregate.validate().map_err(Error::Validation)?;
    aggregate.before_write();
    repository::update(&aggregate).await?;
    Ok(aggregate)
}

pub async fn delete(id: Uuid) -> Result<()> {
    guards::ensure_no_dependents(id, &[("a020_sale", "shipping_method_id", "sales")]).await?;
    if !repository::delete(id).await? {
        return Err(Error::not_found("shipping method", id));
    }
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> Result<Option<ShippingMethod>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> Result<Vec<ShippingMethod>> {
    repository::list_all().await
}
