use contracts::domain::a019_sale_status::aggregate::{CreateSaleStatusDto, UpdateSaleStatusDto, SaleStatus};
use uuid::Uuid;

use super::repository;
use crate::errors::{Error, Result};
use crate::shared::data::guards;

pub async fn create(dto: CreateSaleStatusDto) -> Result<SaleStatus> {
    let aggregate = SaleStatus::new_for_insert(dto.name);
    aggregate.validate().map_err(Error::Validation)?;
    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

pub async fn update(id: Uuid, dto: UpdateSaleStatusDto) -> Result<SaleStatus> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("sale status", id))?;

    aggregate.apply(&dto);
    aggregate.validate().map_err(Error::Validation)?;
    aggregate.before_write();
    repository::update(&aggregate).await?;
    Ok(aggregate)
}

pub async fn delete(id: Uuid) -> Result<()> {
    guards::ensure_no_dependents(id, &[("a020_sale", "status_id", "sales")]).await?;
    if !repository::delete(id).await? {
        return Err(Error::not_found("sale status", id));
    }
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> Result<Option<SaleStatus>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> Result<Vec<SaleStatus>> {
    repository::list_all().await
}
