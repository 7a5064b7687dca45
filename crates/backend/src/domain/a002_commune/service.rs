use contracts::domain::a002_commune::aggregate::{Commune, CreateCommuneDto, UpdateCommuneDto};
use uuid::Uuid;

use super::repository;
use crate::domain::a001_region::repository as region_repository;
use crate::errors::{Error, Result};
use crate::shared::data::guards;

async fn ensure_region_exists(region_id: &str) -> Result<()> {
    let uuid = Uuid::parse_str(region_id)
        .map_err(|_| Error::validation(format!("invalid region id: {region_id}")))?;
    if !region_repository::exists(uuid).await? {
        return Err(Error::not_found("region", region_id));
    }
    Ok(())
}

pub async fn create(dto: CreateCommuneDto) -> Result<Commune> {
    let aggregate = Commune::new_for_insert(dto.name, dto.region_id);
    aggregate.validate().map_err(Error::Validation)?;
    ensure_region_exists(&aggregate.region_id).await?;
    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

pub async fn update(id: Uuid, dto: UpdateCommuneDto) -> Result<Commune> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("commune", id))?;

    aggregate.apply(&dto);
    aggregate.validate().map_err(Error::Validation)?;
    if dto.region_id.is_some() {
        ensure_region_exists(&aggregate.region_id).await?;
    }
    aggregate.before_write();
    repository::update(&aggregate).await?;
    Ok(aggregate)
}

/// Blocked while any address references the commune.
pub async fn delete(id: Uuid) -> Result<()> {
    guards::ensure_no_dependents(id, &[("a003_address", "commune_id", "addresses")]).await?;
    if !repository::delete(id).await? {
        return Err(Error::not_found("commune", id));
    }
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> Result<Option<Commune>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> Result<Vec<Commune>> {
    repository::list_all().await
}

pub async fn list_by_region(region_id: Uuid) -> Result<Vec<Commune>> {
    repository::list_by_region(region_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_region::service as region_service;
    use crate::test_utils;
    use contracts::domain::a001_region::aggregate::CreateRegionDto;

    #[tokio::test]
    async fn commune_requires_existing_region() {
        test_utils::setup_test_db().await;

        let err = create(CreateCommuneDto {
            name: "Valparaíso".to_string(),
            region_id: Uuid::new_v4().to_string(),
        })
        .await
        .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn region_with_communes_cannot_be_deleted() {
        test_utils::setup_test_db().await;

        let region = region_service::create(CreateRegionDto {
            name: "Biobío".to_string(),
        })
        .await
        .unwrap();

        create(CreateCommuneDto {
            name: "Concepción".to_string(),
            region_id: region.id.value().to_string(),
        })
        .await
        .unwrap();

        let err = region_service::delete(region.id.value()).await.unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
    }

    #[tokio::test]
    async fn empty_region_can_be_deleted() {
        test_utils::setup_test_db().await;

        let region = region_service::create(CreateRegionDto {
            name: "Aysén".to_string(),
        })
        .await
        .unwrap();

        region_service::delete(region.id.value()).await.unwrap();
        assert!(region_service::get_by_id(region.id.value())
            .await
            .unwrap()
            .is_none());
    }
}
