use contracts::domain::a012_company_type::aggregate::CompanyType;
use contracts::domain::a013_company::aggregate::{Company, CreateCompanyDto, UpdateCompanyDto};
use uuid::Uuid;

use super::repository;
use crate::domain::a012_company_type::repository as type_repository;
use crate::errors::{Error, Result};
use crate::shared::data::{guards, links};

pub async fn create(dto: CreateCompanyDto) -> Result<Company> {
    let aggregate = Company::new_for_insert(dto.name);
    aggregate.validate().map_err(Error::Validation)?;
    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

pub async fn update(id: Uuid, dto: UpdateCompanyDto) -> Result<Company> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("company", id))?;

    aggregate.apply(&dto);
    aggregate.validate().map_err(Error::Validation)?;
    aggregate.before_write();
    repository::update(&aggregate).await?;
    Ok(aggregate)
}

pub async fn delete(id: Uuid) -> Result<()> {
    guards::ensure_no_dependents(id, &[("a014_product_company", "company_id", "product links")])
        .await?;

    if !repository::exists(id).await? {
        return Err(Error::not_found("company", id));
    }
    links::COMPANY_TYPE.remove_all_for_left(id).await?;
    repository::delete(id).await?;
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> Result<Option<Company>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> Result<Vec<Company>> {
    repository::list_all().await
}

/// Attach a company type. Idempotent: returns whether a link was created.
pub async fn add_type(company_id: Uuid, type_id: Uuid) -> Result<bool> {
    if !repository::exists(company_id).await? {
        return Err(Error::not_found("company", company_id));
    }
    if !type_repository::exists(type_id).await? {
        return Err(Error::not_found("company type", type_id));
    }
    links::COMPANY_TYPE.link(company_id, type_id).await
}

pub async fn remove_type(company_id: Uuid, type_id: Uuid) -> Result<()> {
    if !links::COMPANY_TYPE.unlink(company_id, type_id).await? {
        return Err(Error::NotFound(format!(
            "company {company_id} is not linked to type {type_id}"
        )));
    }
    Ok(())
}

pub async fn types(company_id: Uuid) -> Result<Vec<CompanyType>> {
    if !repository::exists(company_id).await? {
        return Err(Error::not_found("company", company_id));
    }
    let ids = links::COMPANY_TYPE.right_ids(company_id).await?;
    let mut items = Vec::with_capacity(ids.len());
    for id in ids {
        let uuid = Uuid::parse_str(&id)
            .map_err(|_| Error::Internal(format!("corrupt company type link: {id}")))?;
        if let Some(item) = type_repository::get_by_id(uuid).await? {
            items.push(item);
        }
    }
    Ok(items)
}
