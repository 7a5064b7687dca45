use contracts::system::roles::Role;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

use crate::errors::Result;
use crate::shared::data::db::get_connection;

fn role_from_row(row: &sea_orm::QueryResult) -> Result<Role> {
    Ok(Role {
        id: row.try_get("", "id")?,
        name: row.try_get("", "name")?,
        created_at: row.try_get("", "created_at")?,
    })
}

pub async fn insert(role: &Role) -> Result<()> {
    get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT INTO sys_roles (id, name, created_at) VALUES (?, ?, ?)",
            [
                role.id.clone().into(),
                role.name.clone().into(),
                role.created_at.clone().into(),
            ],
        ))
        .await?;
    Ok(())
}

pub async fn get_by_id(id: &str) -> Result<Option<Role>> {
    let row = get_connection()
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT id, name, created_at FROM sys_roles WHERE id = ?",
            [id.into()],
        ))
        .await?;

    row.as_ref().map(role_from_row).transpose()
}

pub async fn get_by_name(name: &str) -> Result<Option<Role>> {
    let row = get_connection()
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT id, name, created_at FROM sys_roles WHERE name = ?",
            [name.into()],
        ))
        .await?;

    row.as_ref().map(role_from_row).transpose()
}

pub async fn list_all() -> Result<Vec<Role>> {
    let rows = get_connection()
        .query_all(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT id, name, created_at FROM sys_roles ORDER BY name".to_string(),
        ))
        .await?;

    rows.iter().map(role_from_row).collect()
}

pub async fn update(role: &Role) -> Result<()> {
    get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "UPDATE sys_roles SET name = ? WHERE id = ?",
            [role.name.clone().into(), role.id.clone().into()],
        ))
        .await?;
    Ok(())
}

pub async fn delete(id: &str) -> Result<bool> {
    let result = get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "DELETE FROM sys_roles WHERE id = ?",
            [id.into()],
        ))
        .await?;
    Ok(result.rows_affected() > 0)
}
