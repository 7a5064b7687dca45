use contracts::domain::a006_status::aggregate::{CreateStatusDto, UpdateStatusDto, Status};
use uuid::Uuid;

use super::repository;
use crate::errors::{Error, Result};
use crate::shared::data::guards;

pub async fn create(dto: CreateStatusDto) -> Result<Status> {
    let aggregate = Status::new_for_insert(dto.name);
    aggregate.validate().map_err(Error::Validation)?;
    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

pub async fn update(id: Uuid, dto: UpdateStatusDto) -> Result<Status> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("status", id))?;

    aggregate.apply(&dto);
    aggregate.validate().map_err(Error::Validation)?;
    aggregate.before_write();
    repository::update(&aggregate).await?;
    Ok(aggregate)
}

pub async fn delete(id: Uuid) -> Result<()> {
    guards::ensure_no_dependents(id, &[("a014_product", "status_id", "products")]).await?;
    if !repository::delete(id).await? {
        return Err(Error::not_found("status", id));
    }
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> Result<Option<Status>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> Result<Vec<Status>> {
    repository::list_all().await
}
