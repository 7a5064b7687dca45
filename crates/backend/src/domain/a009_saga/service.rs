use contracts::domain::a009_saga::aggregate::{CreateSagaDto, UpdateSagaDto, Saga};
use uuid::Uuid;

use super::repository;
use crate::errors::{Error, Result};
use crate::shared::data::guards;

pub async fn create(dto: CreateSagaDto) -> Result<Saga> {
    let aggregate = Saga::new_for_insert(dto.name);
    aggregate.validate().map_err(Error::Validation)?;
    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

pub async fn update(id: Uuid, dto: UpdateSagaDto) -> Result<Saga> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("saga", id))?;

    aggregate.apply(&dto);
    aggregate.validate().map_err(Error::Validation)?;
    aggregate.before_write();
    repository::update(&aggregate).await?;
    Ok(aggregate)
}

/// A saga only goes away once no product claims membership in it.
pub async fn delete(id: Uuid) -> Result<()> {
    guards::ensure_no_dependents(id, &[("a014_product", "saga_id", "products")]).await?;
    if !repository::delete(id).await? {
        return Err(Error::not_found("saga", id));
    }
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> Result<Option<Saga>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> Result<Vec<Saga>> {
    repository::list_all().await
}
