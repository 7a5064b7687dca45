use contracts::domain::a003_address::aggregate::{Address, CreateAddressDto, UpdateAddressDto};
use uuid::Uuid;

use super::repository;
use crate::domain::a002_commune::repository as commune_repository;
use crate::errors::{Error, Result};
use crate::system::users::repository as users_repository;

async fn ensure_commune_exists(commune_id: &str) -> Result<()> {
    let uuid = Uuid::parse_str(commune_id)
        .map_err(|_| Error::validation(format!("invalid commune id: {commune_id}")))?;
    if !commune_repository::exists(uuid).await? {
        return Err(Error::not_found("commune", commune_id));
    }
    Ok(())
}

pub async fn create(dto: CreateAddressDto) -> Result<Address> {
    let aggregate = Address::new_for_insert(
        dto.street,
        dto.number,
        dto.extra,
        dto.commune_id,
        dto.user_id,
    );
    aggregate.validate().map_err(Error::Validation)?;
    ensure_commune_exists(&aggregate.commune_id).await?;

    if users_repository::get_by_id(&aggregate.user_id).await?.is_none() {
        return Err(Error::not_found("user", &aggregate.user_id));
    }
    // One address per user; the unique index on user_id backs this up.
    if repository::get_by_user(&aggregate.user_id).await?.is_some() {
        return Err(Error::conflict("user already has an address"));
    }

    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

pub async fn update(id: Uuid, dto: UpdateAddressDto) -> Result<Address> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("address", id))?;

    aggregate.apply(&dto);
    aggregate.validate().map_err(Error::Validation)?;
    if dto.commune_id.is_some() {
        ensure_commune_exists(&aggregate.commune_id).await?;
    }
    aggregate.before_write();
    repository::update(&aggregate).await?;
    Ok(aggregate)
}

pub async fn delete(id: Uuid) -> Result<()> {
    if !repository::delete(id).await? {
        return Err(Error::not_found("address", id));
    }
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> Result<Option<Address>> {
    repository::get_by_id(id).await
}

pub async fn get_by_user(user_id: &str) -> Result<Option<Address>> {
    repository::get_by_user(user_id).await
}

pub async fn list_all() -> Result<Vec<Address>> {
    repository::list_all().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;

    #[tokio::test]
    async fn second_address_for_same_user_is_a_conflict() {
        test_utils::setup_test_db().await;
        let (user, _role) = test_utils::seed_user("addr-unique").await;
        let commune = test_utils::seed_commune("Ñuñoa").await;

        let dto = CreateAddressDto {
            street: "Av. Irarrázaval".to_string(),
            number: "3001".to_string(),
            extra: None,
            commune_id: commune.id.value().to_string(),
            user_id: user.id.clone(),
        };
        create(dto.clone()).await.unwrap();

        let err = create(dto).await.unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
    }

    #[tokio::test]
    async fn address_requires_existing_commune() {
        test_utils::setup_test_db().await;
        let (user, _role) = test_utils::seed_user("addr-commune").await;

        let err = create(CreateAddressDto {
            street: "Calle Falsa".to_string(),
            number: "123".to_string(),
            extra: None,
            commune_id: Uuid::new_v4().to_string(),
            user_id: user.id,
        })
        .await
        .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn commune_with_addresses_cannot_be_deleted() {
        test_utils::setup_test_db().await;
        let (user, _role) = test_utils::seed_user("addr-commune-guard").await;
        let commune = test_utils::seed_commune("Providencia").await;

        create(CreateAddressDto {
            street: "Av. Providencia".to_string(),
            number: "1200".to_string(),
            extra: Some("depto 42".to_string()),
            commune_id: commune.id.value().to_string(),
            user_id: user.id,
        })
        .await
        .unwrap();

        let err = crate::domain::a002_commune::service::delete(commune.id.value())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
    }
}
