use contracts::domain::a007_genre::aggregate::{CreateGenreDto, UpdateGenreDto, Genre};
use uuid::Uuid;

use super::repository;
use crate::errors::{Error, Result};
use crate::shared::data::guards;

pub async fn create(dto: CreateGenreDto) -> Result<Genre> {
    let aggregate = Genre::new_for_insert(dto.name);
    aggregate.validate().map_err(Error::Validation)?;
    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

pub async fn update(id: Uuid, dto: UpdateGenreDto) -> Result<Genre> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("genre", id))?;

    aggregate.apply(&dto);
    aggregate.validate().map_err(Error::Validation)?;
    aggregate.before_write();
    repository::update(&aggregate).await?;
    Ok(aggregate)
}

pub async fn delete(id: Uuid) -> Result<()> {
    guards::ensure_no_dependents(id, &[("a014_product_genre", "genre_id", "product links")]).await?;
    if !repository::delete(id).await? {
        return Err(Error::not_found("genre", id));
    }
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> Result<Option<Genre>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> Result<Vec<Genre>> {
    repository::list_all().await
}
