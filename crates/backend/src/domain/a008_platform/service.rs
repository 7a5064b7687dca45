use contracts::domain::a008_platform::aggregate::{CreatePlatformDto, UpdatePlatformDto, Platform};
use uuid::Uuid;

use super::repository;
use crate::errors::{Error, Result};
use crate::shared::data::guards;

pub async fn create(dto: CreatePlatformDto) -> Result<Platform> {
    let aggregate = Platform::new_for_insert(dto.name);
    aggregate.validate().map_err(Error::Validation)?;
    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

pub async fn update(id: Uuid, dto: UpdatePlatformDto) -> Result<Platform> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("platform", id))?;

    aggregate.apply(&dto);
    aggregate.validate().map_err(Error::Validation)?;
    aggregate.before_write();
    repository::update(&aggregate).await?;
    Ok(aggregate)
}

pub async fn delete(id: Uuid) -> Result<()> {
    guards::ensure_no_dependents(id, &[("a014_product_platform", "platform_id", "product links")]).await?;
    if !repository::delete(id).await? {
        return Err(Error::not_found("platform", id));
    }
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> Result<Option<Platform>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> Result<Vec<Platform>> {
    repository::list_all().await
}
