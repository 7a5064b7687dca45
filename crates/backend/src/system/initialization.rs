use chrono::Utc;
use contracts::system::roles::Role;
use contracts::system::users::CreateUserDto;
use uuid::Uuid;

use crate::errors::Result;
use crate::system::roles::repository as roles_repository;
use crate::system::users::{repository as users_repository, service as users_service};

const DEFAULT_ROLES: &[&str] = &["admin", "customer"];

/// First-run provisioning: make sure the default roles exist and that at
/// least one admin account can log in.
pub async fn ensure_defaults() -> Result<()> {
    for name in DEFAULT_ROLES {
        if roles_repository::get_by_name(name).await?.is_none() {
            roles_repository::insert(&Role {
                id: Uuid::new_v4().to_string(),
                name: (*name).to_string(),
                created_at: Utc::now().to_rfc3339(),
            })
            .await?;
            tracing::info!("created default role '{name}'");
        }
    }

    if users_repository::count_users().await? == 0 {
        let admin_role = roles_repository::get_by_name("admin")
            .await?
            .expect("admin role was just ensured");

        let password = std::env::var("GAMESTORE_ADMIN_PASSWORD")
            .unwrap_or_else(|_| "change-me-now".to_string());

        users_service::create(CreateUserDto {
            username: "admin".to_string(),
            password,
            email: None,
            full_name: Some("Administrator".to_string()),
            role_id: admin_role.id,
        })
        .await?;

        tracing::warn!(
            "created initial admin account; set GAMESTORE_ADMIN_PASSWORD and rotate the password"
        );
    }

    Ok(())
}
