use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::Utc;
use contracts::system::auth::AuthSession;
use rand::RngCore;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use sha2::{Digest, Sha256};

use crate::errors::{Error, Result};
use crate::shared::data::db::get_connection;
use crate::system::users::repository as users_repository;

const SESSION_LIFETIME_HOURS: i64 = 24;

/// Opaque session token handed to the client; the store only ever sees
/// its SHA-256 hash.
pub fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Record a new session for the user and return the raw token.
pub async fn create_session(user_id: &str) -> Result<String> {
    let token = generate_token();
    let expires_at = (Utc::now() + chrono::Duration::hours(SESSION_LIFETIME_HOURS)).to_rfc3339();

    get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT INTO sys_sessions (id, user_id, token_hash, created_at, expires_at)
             VALUES (?, ?, ?, ?, ?)",
            [
                uuid::Uuid::new_v4().to_string().into(),
                user_id.to_string().into(),
                hash_token(&token).into(),
                Utc::now().to_rfc3339().into(),
                expires_at.into(),
            ],
        ))
        .await?;

    Ok(token)
}

/// Resolve a bearer token to the authenticated identity. Fails when the
/// session is unknown, expired, revoked, or its user is gone or inactive.
pub async fn validate_session(token: &str) -> Result<AuthSession> {
    let now = Utc::now().to_rfc3339();
    let row = get_connection()
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT user_id FROM sys_sessions
             WHERE token_hash = ? AND expires_at > ? AND revoked_at IS NULL",
            [hash_token(token).into(), now.into()],
        ))
        .await?;

    let user_id: String = match row {
        Some(row) => row.try_get("", "user_id")?,
        None => return Err(Error::Unauthorized("invalid or expired session".into())),
    };

    let user = users_repository::get_by_id(&user_id)
        .await?
        .ok_or_else(|| Error::Unauthorized("session user no longer exists".into()))?;
    if !user.is_active {
        return Err(Error::Unauthorized("user account is inactive".into()));
    }

    let role = crate::system::roles::repository::get_by_id(&user.role_id)
        .await?
        .map(|role| role.name)
        .unwrap_or_default();

    Ok(AuthSession {
        user_id: user.id,
        username: user.username,
        role,
    })
}

pub async fn revoke_session(token: &str) -> Result<()> {
    get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "UPDATE sys_sessions SET revoked_at = ? WHERE token_hash = ?",
            [Utc::now().to_rfc3339().into(), hash_token(token).into()],
        ))
        .await?;
    Ok(())
}

/// Drop every session of a user, used when the account is deleted.
pub async fn revoke_sessions_for_user(user_id: &str) -> Result<()> {
    get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "UPDATE sys_sessions SET revoked_at = ? WHERE user_id = ? AND revoked_at IS NULL",
            [Utc::now().to_rfc3339().into(), user_id.to_string().into()],
        ))
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::test_utils;

    #[tokio::test]
    async fn session_round_trip_and_revocation() {
        test_utils::setup_test_db().await;
        let (user, _role) = test_utils::seed_user("session-round-trip").await;

        let token = create_session(&user.id).await.unwrap();
        let session = validate_session(&token).await.unwrap();
        assert_eq!(session.user_id, user.id);
        assert_eq!(session.username, user.username);

        revoke_session(&token).await.unwrap();
        let err = validate_session(&token).await.unwrap_err();
        assert!(matches!(err, Error::Unauthorized(_)));
    }

    #[tokio::test]
    async fn unknown_token_is_unauthorized() {
        test_utils::setup_test_db().await;
        let err = validate_session("not-a-real-token").await.unwrap_err();
        assert!(matches!(err, Error::Unauthorized(_)));
    }
}
