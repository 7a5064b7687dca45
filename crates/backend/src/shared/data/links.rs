use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use uuid::Uuid;

use crate::errors::Result;
use crate::shared::data::db::get_connection;

/// Descriptor of one many-to-many bridge table.
///
/// Every bridge row is unique per (left, right) pair. The insert goes
/// through `INSERT OR IGNORE` so concurrent writers racing on the same
/// pair settle on the unique index instead of failing; `link` stays
/// idempotent either way.
pub struct BridgeTable {
    pub table: &'static str,
    pub left: &'static str,
    pub right: &'static str,
}

pub const PRODUCT_GENRE: BridgeTable = BridgeTable {
    table: "a014_product_genre",
    left: "product_id",
    right: "genre_id",
};

pub const PRODUCT_PLATFORM: BridgeTable = BridgeTable {
    table: "a014_product_platform",
    left: "product_id",
    right: "platform_id",
};

pub const PRODUCT_DEVELOPER: BridgeTable = BridgeTable {
    table: "a014_product_developer",
    left: "product_id",
    right: "developer_id",
};

pub const PRODUCT_COMPANY: BridgeTable = BridgeTable {
    table: "a014_product_company",
    left: "product_id",
    right: "company_id",
};

pub const DEVELOPER_TYPE: BridgeTable = BridgeTable {
    table: "a011_developer_type_link",
    left: "developer_id",
    right: "developer_type_id",
};

pub const COMPANY_TYPE: BridgeTable = BridgeTable {
    table: "a013_company_type_link",
    left: "company_id",
    right: "company_type_id",
};

impl BridgeTable {
    /// Create the bridge row unless the pair already exists. Returns
    /// whether a row was actually inserted.
    pub async fn link(&self, left: Uuid, right: Uuid) -> Result<bool> {
        let sql = format!(
            "INSERT OR IGNORE INTO {} (id, {}, {}, created_at) VALUES (?, ?, ?, ?)",
            self.table, self.left, self.right
        );
        let result = get_connection()
            .execute(Statement::from_sql_and_values(
                DatabaseBackend::Sqlite,
                &sql,
                [
                    Uuid::new_v4().to_string().into(),
                    left.to_string().into(),
                    right.to_string().into(),
                    Utc::now().to_rfc3339().into(),
                ],
            ))
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove the bridge row for the pair. Returns whether one existed.
    pub async fn unlink(&self, left: Uuid, right: Uuid) -> Result<bool> {
        let sql = format!(
            "DELETE FROM {} WHERE {} = ? AND {} = ?",
            self.table, self.left, self.right
        );
        let result = get_connection()
            .execute(Statement::from_sql_and_values(
                DatabaseBackend::Sqlite,
                &sql,
                [left.to_string().into(), right.to_string().into()],
            ))
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn contains(&self, left: Uuid, right: Uuid) -> Result<bool> {
        let sql = format!(
            "SELECT 1 AS present FROM {} WHERE {} = ? AND {} = ?",
            self.table, self.left, self.right
        );
        let row = get_connection()
            .query_one(Statement::from_sql_and_values(
                DatabaseBackend::Sqlite,
                &sql,
                [left.to_string().into(), right.to_string().into()],
            ))
            .await?;
        Ok(row.is_some())
    }

    /// Ids on the right side linked to the given left id.
    pub async fn right_ids(&self, left: Uuid) -> Result<Vec<String>> {
        let sql = format!(
            "SELECT {} AS linked FROM {} WHERE {} = ? ORDER BY created_at",
            self.right, self.table, self.left
        );
        self.linked_ids(&sql, left).await
    }

    /// Ids on the left side linked to the given right id.
    pub async fn left_ids(&self, right: Uuid) -> Result<Vec<String>> {
        let sql = format!(
            "SELECT {} AS linked FROM {} WHERE {} = ? ORDER BY created_at",
            self.left, self.table, self.right
        );
        self.linked_ids(&sql, right).await
    }

    async fn linked_ids(&self, sql: &str, id: Uuid) -> Result<Vec<String>> {
        let rows = get_connection()
            .query_all(Statement::from_sql_and_values(
                DatabaseBackend::Sqlite,
                sql,
                [id.to_string().into()],
            ))
            .await?;

        let mut ids = Vec::with_capacity(rows.len());
        for row in rows {
            ids.push(row.try_get("", "linked")?);
        }
        Ok(ids)
    }

    /// Drop every bridge row owned by the left id, used when the owning
    /// aggregate is deleted.
    pub async fn remove_all_for_left(&self, left: Uuid) -> Result<u64> {
        let sql = format!("DELETE FROM {} WHERE {} = ?", self.table, self.left);
        let result = get_connection()
            .execute(Statement::from_sql_and_values(
                DatabaseBackend::Sqlite,
                &sql,
                [left.to_string().into()],
            ))
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::guards;
    use crate::test_utils;

    #[tokio::test]
    async fn linking_twice_leaves_one_bridge_row() {
        test_utils::setup_test_db().await;
        let product = Uuid::new_v4();
        let genre = Uuid::new_v4();

        assert!(PRODUCT_GENRE.link(product, genre).await.unwrap());
        assert!(!PRODUCT_GENRE.link(product, genre).await.unwrap());

        let count = guards::count_rows(PRODUCT_GENRE.table, PRODUCT_GENRE.left, product)
            .await
            .unwrap();
        assert_eq!(count, 1);
        assert!(PRODUCT_GENRE.contains(product, genre).await.unwrap());
    }

    #[tokio::test]
    async fn unlink_reports_missing_pair() {
        test_utils::setup_test_db().await;
        let product = Uuid::new_v4();
        let genre = Uuid::new_v4();

        assert!(!PRODUCT_GENRE.unlink(product, genre).await.unwrap());

        PRODUCT_GENRE.link(product, genre).await.unwrap();
        assert!(PRODUCT_GENRE.unlink(product, genre).await.unwrap());
        assert!(!PRODUCT_GENRE.contains(product, genre).await.unwrap());
    }
}
