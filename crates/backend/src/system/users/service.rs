use chrono::Utc;
use contracts::system::users::{ChangePasswordDto, CreateUserDto, UpdateUserDto, User};
use uuid::Uuid;

use super::repository;
use crate::errors::{Error, Result};
use crate::shared::data::guards;
use crate::system::auth::{password, session};
use crate::system::roles::repository as roles_repository;

/// Create a new user account.
pub async fn create(dto: CreateUserDto) -> Result<User> {
    if dto.username.trim().is_empty() {
        return Err(Error::validation("username must not be empty"));
    }
    if repository::get_by_username(&dto.username).await?.is_some() {
        return Err(Error::conflict("username already exists"));
    }
    if let Some(email) = &dto.email {
        if !email.trim().is_empty() && !email.contains('@') {
            return Err(Error::validation("invalid email format"));
        }
    }
    if roles_repository::get_by_id(&dto.role_id).await?.is_none() {
        return Err(Error::not_found("role", &dto.role_id));
    }

    password::validate_password_strength(&dto.password)?;
    let password_hash = password::hash_password(&dto.password)?;

    let now = Utc::now().to_rfc3339();
    let user = User {
        id: Uuid::new_v4().to_string(),
        username: dto.username,
        email: dto.email,
        full_name: dto.full_name,
        role_id: dto.role_id,
        is_active: true,
        created_at: now.clone(),
        updated_at: now,
        last_login_at: None,
    };

    repository::create_with_password(&user, &password_hash).await?;
    Ok(user)
}

/// Partial update: only supplied fields overwrite the stored record.
pub async fn update(id: &str, dto: UpdateUserDto) -> Result<User> {
    let mut user = repository::get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("user", id))?;

    if let Some(email) = dto.email {
        if !email.trim().is_empty() && !email.contains('@') {
            return Err(Error::validation("invalid email format"));
        }
        user.email = Some(email);
    }
    if let Some(full_name) = dto.full_name {
        user.full_name = Some(full_name);
    }
    if let Some(role_id) = dto.role_id {
        if roles_repository::get_by_id(&role_id).await?.is_none() {
            return Err(Error::not_found("role", &role_id));
        }
        user.role_id = role_id;
    }
    if let Some(is_active) = dto.is_active {
        user.is_active = is_active;
    }
    user.updated_at = Utc::now().to_rfc3339();

    repository::update(&user).await?;
    Ok(user)
}

/// Remove an account. Sales are business records and block the delete;
/// the user's address and sessions go with the account.
pub async fn delete(id: &str) -> Result<()> {
    let uuid =
        Uuid::parse_str(id).map_err(|_| Error::validation(format!("invalid user id: {id}")))?;
    if repository::get_by_id(id).await?.is_none() {
        return Err(Error::not_found("user", id));
    }
    guards::ensure_no_dependents(uuid, &[("a020_sale", "user_id", "sales")]).await?;

    crate::domain::a003_address::repository::delete_by_user(id).await?;
    session::revoke_sessions_for_user(id).await?;
    repository::delete(id).await?;
    Ok(())
}

pub async fn get_by_id(id: &str) -> Result<Option<User>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> Result<Vec<User>> {
    repository::list_all().await
}

/// Change a password. Admins may reset anyone's; users changing their own
/// must present the old password.
pub async fn change_password(dto: ChangePasswordDto, requester_id: &str) -> Result<()> {
    let user = repository::get_by_id(&dto.user_id)
        .await?
        .ok_or_else(|| Error::not_found("user", &dto.user_id))?;

    let requester = repository::get_by_id(requester_id)
        .await?
        .ok_or_else(|| Error::not_found("user", requester_id))?;

    if dto.user_id != requester_id {
        let requester_role = roles_repository::get_by_id(&requester.role_id).await?;
        if requester_role.map(|r| r.name).as_deref() != Some("admin") {
            return Err(Error::Forbidden);
        }
    } else {
        let old_password = dto
            .old_password
            .as_deref()
            .ok_or_else(|| Error::validation("old password is required"))?;
        let current_hash = repository::get_password_hash(&user.id)
            .await?
            .ok_or_else(|| Error::Internal("password hash not found".into()))?;
        if !password::verify_password(old_password, &current_hash)? {
            return Err(Error::Unauthorized("invalid old password".into()));
        }
    }

    password::validate_password_strength(&dto.new_password)?;
    let new_hash = password::hash_password(&dto.new_password)?;
    repository::update_password(&dto.user_id, &new_hash).await?;
    Ok(())
}

/// Verify user credentials (for login).
pub async fn verify_credentials(username: &str, pass: &str) -> Result<Option<User>> {
    let user = match repository::get_by_username(username).await? {
        Some(user) => user,
        None => return Ok(None),
    };

    if !user.is_active {
        return Err(Error::Unauthorized("user account is inactive".into()));
    }

    let password_hash = repository::get_password_hash(&user.id)
        .await?
        .ok_or_else(|| Error::Internal("password hash not found".into()))?;

    if !password::verify_password(pass, &password_hash)? {
        return Ok(None);
    }

    let _ = repository::update_last_login(&user.id).await;

    Ok(Some(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;

    #[tokio::test]
    async fn duplicate_username_is_a_conflict() {
        test_utils::setup_test_db().await;
        let role = test_utils::seed_role(&format!("dup-user-{}", Uuid::new_v4())).await;
        let username = format!("user-{}", Uuid::new_v4());

        let dto = CreateUserDto {
            username: username.clone(),
            password: "password123".to_string(),
            email: None,
            full_name: None,
            role_id: role.id.clone(),
        };
        create(dto.clone()).await.unwrap();

        let err = create(dto).await.unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
    }

    #[tokio::test]
    async fn wrong_password_does_not_verify() {
        test_utils::setup_test_db().await;
        let role = test_utils::seed_role(&format!("verify-{}", Uuid::new_v4())).await;
        let username = format!("verify-{}", Uuid::new_v4());

        create(CreateUserDto {
            username: username.clone(),
            password: "password123".to_string(),
            email: None,
            full_name: None,
            role_id: role.id,
        })
        .await
        .unwrap();

        assert!(verify_credentials(&username, "password123")
            .await
            .unwrap()
            .is_some());
        assert!(verify_credentials(&username, "wrong-password")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn unknown_role_fails_account_creation() {
        test_utils::setup_test_db().await;
        let err = create(CreateUserDto {
            username: format!("orphan-{}", Uuid::new_v4()),
            password: "password123".to_string(),
            email: None,
            full_name: None,
            role_id: Uuid::new_v4().to_string(),
        })
        .await
        .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
