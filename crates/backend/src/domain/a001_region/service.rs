use contracts::domain::a001_region::aggregate::{CreateRegionDto, UpdateRegionDto, Region};
use uuid::Uuid;

use super::repository;
use crate::errors::{Error, Result};
use crate::shared::data::guards;

pub async fn create(dto: CreateRegionDto) -> Result<Region> {
    let aggregate = Region::new_for_insert(dto.name);
    aggregate.validate().map_err(Error::Validation)?;
    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

pub async fn update(id: Uuid, dto: UpdateRegionDto) -> Result<Region> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("region", id))?;

    aggregate.apply(&dto);
    aggregate.validate().map_err(Error::Validation)?;
    aggregate.before_write();
    repository::update(&aggregate).await?;
    Ok(aggregate)
}

/// Regions with communes underneath them stay put.
pub async fn delete(id: Uuid) -> Result<()> {
    guards::ensure_no_dependents(id, &[("a002_commune", "region_id", "communes")]).await?;
    if !repository::delete(id).await? {
        return Err(Error::not_found("region", id));
    }
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> Result<Option<Region>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> Result<Vec<Region>> {
    repository::list_all().await
}
