use chrono::Utc;
use contracts::system::roles::{CreateRoleDto, Role, UpdateRoleDto};
use uuid::Uuid;

use super::repository;
use crate::errors::{Error, Result};
use crate::shared::data::guards;

pub async fn create(dto: CreateRoleDto) -> Result<Role> {
    if dto.name.trim().is_empty() {
        return Err(Error::validation("role name must not be empty"));
    }
    if repository::get_by_name(&dto.name).await?.is_some() {
        return Err(Error::conflict("role name already exists"));
    }

    let role = Role {
        id: Uuid::new_v4().to_string(),
        name: dto.name,
        created_at: Utc::now().to_rfc3339(),
    };
    repository::insert(&role).await?;
    Ok(role)
}

pub async fn update(id: &str, dto: UpdateRoleDto) -> Result<Role> {
    let mut role = repository::get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("role", id))?;

    if let Some(name) = dto.name {
        if name.trim().is_empty() {
            return Err(Error::validation("role name must not be empty"));
        }
        if let Some(existing) = repository::get_by_name(&name).await? {
            if existing.id != role.id {
                return Err(Error::conflict("role name already exists"));
            }
        }
        role.name = name;
    }

    repository::update(&role).await?;
    Ok(role)
}

/// Deletion is blocked while any user still references the role.
pub async fn delete(id: &str) -> Result<()> {
    let uuid =
        Uuid::parse_str(id).map_err(|_| Error::validation(format!("invalid role id: {id}")))?;
    guards::ensure_no_dependents(uuid, &[("sys_users", "role_id", "users")]).await?;

    if !repository::delete(id).await? {
        return Err(Error::not_found("role", id));
    }
    Ok(())
}

pub async fn get_by_id(id: &str) -> Result<Option<Role>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> Result<Vec<Role>> {
    repository::list_all().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;

    #[tokio::test]
    async fn deleting_referenced_role_is_a_conflict() {
        test_utils::setup_test_db().await;
        let (_user, role) = test_utils::seed_user("role-delete-guard").await;

        let err = delete(&role.id).await.unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
    }

    #[tokio::test]
    async fn deleting_unreferenced_role_succeeds() {
        test_utils::setup_test_db().await;
        let role = create(CreateRoleDto {
            name: format!("temp-{}", Uuid::new_v4()),
        })
        .await
        .unwrap();

        delete(&role.id).await.unwrap();
        assert!(get_by_id(&role.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_role_name_is_a_conflict() {
        test_utils::setup_test_db().await;
        let name = format!("dup-{}", Uuid::new_v4());
        create(CreateRoleDto { name: name.clone() }).await.unwrap();

        let err = create(CreateRoleDto { name }).await.unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
    }
}
