use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use uuid::Uuid;

use crate::errors::{Error, Result};
use crate::shared::data::db::get_connection;

/// Count rows of `table` whose `column` references the given id. Table and
/// column names are compile-time constants supplied by the services.
pub async fn count_rows(table: &str, column: &str, id: Uuid) -> Result<i64> {
    let sql = format!("SELECT COUNT(*) AS count FROM {table} WHERE {column} = ?");
    let row = get_connection()
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            &sql,
            [id.to_string().into()],
        ))
        .await?;

    match row {
        Some(row) => Ok(row.try_get("", "count")?),
        None => Ok(0),
    }
}

/// Referential-integrity guard: deleting a parent row is rejected with a
/// conflict while any dependent still references it. Applied uniformly to
/// every parent/child pair in the catalog, location, and identity stores.
pub async fn ensure_no_dependents(
    id: Uuid,
    dependents: &[(&'static str, &'static str, &'static str)],
) -> Result<()> {
    for (table, column, label) in dependents {
        let count = count_rows(table, column, id).await?;
        if count > 0 {
            return Err(Error::Conflict(format!(
                "cannot delete: {count} {label} still reference it"
            )));
        }
    }
    Ok(())
}
