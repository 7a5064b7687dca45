use contracts::domain::a010_developer_type::aggregate::DeveloperType;
use contracts::domain::a011_developer::aggregate::{
    CreateDeveloperDto, Developer, UpdateDeveloperDto,
};
use uuid::Uuid;

use super::repository;
use crate::domain::a010_developer_type::repository as type_repository;
use crate::errors::{Error, Result};
use crate::shared::data::{guards, links};

pub async fn create(dto: CreateDeveloperDto) -> Result<Developer> {
    let aggregate = Developer::new_for_insert(dto.name);
    aggregate.validate().map_err(Error::Validation)?;
    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

pub async fn update(id: Uuid, dto: UpdateDeveloperDto) -> Result<Developer> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("developer", id))?;

    aggregate.apply(&dto);
    aggregate.validate().map_err(Error::Validation)?;
    aggregate.before_write();
    repository::update(&aggregate).await?;
    Ok(aggregate)
}

/// A developer still credited on products cannot go away; its own type
/// links are owned rows and are removed with it.
pub async fn delete(id: Uuid) -> Result<()> {
    guards::ensure_no_dependents(id, &[("a014_product_developer", "developer_id", "product links")])
        .await?;

    if !repository::exists(id).await? {
        return Err(Error::not_found("developer", id));
    }
    links::DEVELOPER_TYPE.remove_all_for_left(id).await?;
    repository::delete(id).await?;
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> Result<Option<Developer>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> Result<Vec<Developer>> {
    repository::list_all().await
}

/// Attach a developer type. Idempotent: returns whether a link was created.
pub async fn add_type(developer_id: Uuid, type_id: Uuid) -> Result<bool> {
    if !repository::exists(developer_id).await? {
        return Err(Error::not_found("developer", developer_id));
    }
    if !type_repository::exists(type_id).await? {
        return Err(Error::not_found("developer type", type_id));
    }
    links::DEVELOPER_TYPE.link(developer_id, type_id).await
}

pub async fn remove_type(developer_id: Uuid, type_id: Uuid) -> Result<()> {
    if !links::DEVELOPER_TYPE.unlink(developer_id, type_id).await? {
        return Err(Error::NotFound(format!(
            "developer {developer_id} is not linked to type {type_id}"
        )));
    }
    Ok(())
}

pub async fn types(developer_id: Uuid) -> Result<Vec<DeveloperType>> {
    if !repository::exists(developer_id).await? {
        return Err(Error::not_found("developer", developer_id));
    }
    let ids = links::DEVELOPER_TYPE.right_ids(developer_id).await?;
    let mut items = Vec::with_capacity(ids.len());
    for id in ids {
        let uuid = Uuid::parse_str(&id)
            .map_err(|_| Error::Internal(format!("corrupt developer type link: {id}")))?;
        if let Some(item) = type_repository::get_by_id(uuid).await? {
            items.push(item);
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a010_developer_type::service as type_service;
    use crate::test_utils;
    use contracts::domain::a010_developer_type::aggregate::CreateDeveloperTypeDto;

    #[tokio::test]
    async fn type_links_are_idempotent() {
        test_utils::setup_test_db().await;
        let developer = create(CreateDeveloperDto {
            name: "Mobius Digital".to_string(),
        })
        .await
        .unwrap();
        let dev_type = type_service::create(CreateDeveloperTypeDto {
            name: format!("indie-{}", Uuid::new_v4()),
        })
        .await
        .unwrap();

        assert!(add_type(developer.id.value(), dev_type.id.value())
            .await
            .unwrap());
        assert!(!add_type(developer.id.value(), dev_type.id.value())
            .await
            .unwrap());

        let linked = types(developer.id.value()).await.unwrap();
        assert_eq!(linked.len(), 1);
        assert_eq!(linked[0].id.value(), dev_type.id.value());
    }

    #[tokio::test]
    async fn linked_type_blocks_deletion_until_unlinked() {
        test_utils::setup_test_db().await;
        let developer = create(CreateDeveloperDto {
            name: "Team Cherry".to_string(),
        })
        .await
        .unwrap();
        let dev_type = type_service::create(CreateDeveloperTypeDto {
            name: format!("studio-{}", Uuid::new_v4()),
        })
        .await
        .unwrap();

        add_type(developer.id.value(), dev_type.id.value())
            .await
            .unwrap();

        let err = type_service::delete(dev_type.id.value()).await.unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));

        remove_type(developer.id.value(), dev_type.id.value())
            .await
            .unwrap();
        type_service::delete(dev_type.id.value()).await.unwrap();
    }

    #[tokio::test]
    async fn removing_missing_link_is_not_found() {
        test_utils::setup_test_db().await;
        let err = remove_type(Uuid::new_v4(), Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
