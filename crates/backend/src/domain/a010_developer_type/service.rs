use contracts::domain::a010_developer_type::aggregate::{CreateDeveloperTypeDto, UpdateDeveloperTypeDto, DeveloperType};
use uuid::Uuid;

use super::repository;
use crate::errors::{Error, Result};
use crate::shared::data::guards;

pub async fn create(dto: CreateDeveloperTypeDto) -> Result<DeveloperType> {
    let aggregate = DeveloperType::new_for_insert(dto.name);
    aggregate.validate().map_err(Error::Validation)?;
    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

pub async fn update(id: Uuid, dto: UpdateDeveloperTypeDto) -> Result<DeveloperType> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("developer type", id))?;

    aggregate.apply(&dto);
    aggregate.validate().map_err(Error::Validation)?;
    aggregate.before_write();
    repository::update(&aggregate).await?;
    Ok(aggregate)
}

pub async fn delete(id: Uuid) -> Result<()> {
    guards::ensure_no_dependents(id, &[("a011_developer_type_link", "developer_type_id", "developer links")]).await?;
    if !repository::delete(id).await? {
        return Err(Error::not_found("developer type", id));
    }
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> Result<Option<DeveloperType>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> Result<Vec<DeveloperType>> {
    repository::list_all().await
}
