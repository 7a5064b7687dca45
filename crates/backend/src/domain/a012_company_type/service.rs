use contracts::domain::a012_company_type::aggregate::{CreateCompanyTypeDto, UpdateCompanyTypeDto, CompanyType};
use uuid::Uuid;

use super::repository;
use crate::errors::{Error, Result};
use crate::shared::data::guards;

pub async fn create(dto: CreateCompanyTypeDto) -> Result<CompanyType> {
    let aggregate = CompanyType::new_for_insert(dto.name);
    aggregate.validate().map_err(Error::Validation)?;
    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

pub async fn update(id: Uuid, dto: UpdateCompanyTypeDto) -> Result<CompanyType> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("company type", id))?;

    aggregate.apply(&dto);
    aggregate.validate().map_err(Error::Validation)?;
    aggregate.before_write();
    repository::update(&aggregate).await?;
    Ok(aggregate)
}

pub async fn delete(id: Uuid) -> Result<()> {
    guards::ensure_no_dependents(id, &[("a013_company_type_link", "company_type_id", "company links")]).await?;
    if !repository::delete(id).await? {
        return Err(Error::not_found("company type", id));
    }
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> Result<Option<CompanyType>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> Result<Vec<CompanyType>> {
    repository::list_all().await
}
