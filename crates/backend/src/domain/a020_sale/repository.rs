use contracts::domain::a020_sale::aggregate::{Sale, SaleId, SaleLine};
use contracts::domain::common::{AggregateId, EntityMetadata};

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, DatabaseTransaction, QueryFilter, QueryOrder, Set, TransactionTrait};

use crate::shared::data::db::get_connection;

/// Header row of the aggregate.
mod sale_row {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "a020_sale")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: String,
        pub user_id: String,
        pub payment_method_id: String,
        pub shipping_method_id: String,
        pub status_id: String,
        pub purchase_date: chrono::NaiveDate,
        pub purchase_time: chrono::NaiveTime,
        pub created_at: chrono::DateTime<chrono::Utc>,
        pub updated_at: chrono::DateTime<chrono::Utc>,
        pub version: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Line rows; `line_no` keeps the order the lines were submitted in.
mod line_row {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "a020_sale_line")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: String,
        pub sale_id: String,
        pub product_id: String,
        pub line_no: i32,
        pub quantity: i32,
        pub unit_price: f64,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn sale_from_rows(header: sale_row::Model, lines: Vec<line_row::Model>) -> Sale {
    let uuid = uuid::Uuid::parse_str(&header.id).unwrap_or_else(|_| uuid::Uuid::new_v4());
    Sale {
        id: SaleId::new(uuid),
        user_id: header.user_id,
        payment_method_id: header.payment_method_id,
        shipping_method_id: header.shipping_method_id,
        status_id: header.status_id,
        purchase_date: header.purchase_date,
        purchase_time: header.purchase_time,
        lines: lines
            .into_iter()
            .map(|line| SaleLine {
                id: line.id,
                product_id: line.product_id,
                quantity: line.quantity,
                unit_price: line.unit_price,
            })
            .collect(),
        metadata: EntityMetadata::restored(header.created_at, header.updated_at, header.version),
    }
}

async fn load_lines(sale_id: &str) -> crate::errors::Result<Vec<line_row::Model>> {
    Ok(line_row::Entity::find()
        .filter(line_row::Column::SaleId.eq(sale_id))
        .order_by_asc(line_row::Column::LineNo)
        .all(conn())
        .await?)
}

/// Persist the sale and every line in one transaction; a sale without all
/// of its lines is never observable.
pub async fn insert(aggregate: &Sale) -> crate::errors::Result<uuid::Uuid> {
    let uuid = aggregate.id.value();
    let txn: DatabaseTransaction = conn().begin().await?;

    let header = sale_row::ActiveModel {
        id: Set(uuid.to_string()),
        user_id: Set(aggregate.user_id.clone()),
        payment_method_id: Set(aggregate.payment_method_id.clone()),
        shipping_method_id: Set(aggregate.shipping_method_id.clone()),
        status_id: Set(aggregate.status_id.clone()),
        purchase_date: Set(aggregate.purchase_date),
        purchase_time: Set(aggregate.purchase_time),
        created_at: Set(aggregate.metadata.created_at),
        updated_at: Set(aggregate.metadata.updated_at),
        version: Set(aggregate.metadata.version),
    };
    header.insert(&txn).await?;

    for (index, line) in aggregate.lines.iter().enumerate() {
        let row = line_row::ActiveModel {
            id: Set(line.id.clone()),
            sale_id: Set(uuid.to_string()),
            product_id: Set(line.product_id.clone()),
            line_no: Set(index as i32),
            quantity: Set(line.quantity),
            unit_price: Set(line.unit_price),
        };
        row.insert(&txn).await?;
    }

    txn.commit().await?;
    Ok(uuid)
}

pub async fn get_by_id(id: uuid::Uuid) -> crate::errors::Result<Option<Sale>> {
    let header = sale_row::Entity::find_by_id(id.to_string())
        .one(conn())
        .await?;

    match header {
        Some(header) => {
            let lines = load_lines(&header.id).await?;
            Ok(Some(sale_from_rows(header, lines)))
        }
        None => Ok(None),
    }
}

pub async fn list_all() -> crate::errors::Result<Vec<Sale>> {
    let headers = sale_row::Entity::find()
        .order_by_asc(sale_row::Column::CreatedAt)
        .all(conn())
        .await?;

    let mut sales = Vec::with_capacity(headers.len());
    for header in headers {
        let lines = load_lines(&header.id).await?;
        sales.push(sale_from_rows(header, lines));
    }
    Ok(sales)
}

pub async fn list_by_user(user_id: &str) -> crate::errors::Result<Vec<Sale>> {
    let headers = sale_row::Entity::find()
        .filter(sale_row::Column::UserId.eq(user_id))
        .order_by_asc(sale_row::Column::CreatedAt)
        .all(conn())
        .await?;

    let mut sales = Vec::with_capacity(headers.len());
    for header in headers {
        let lines = load_lines(&header.id).await?;
        sales.push(sale_from_rows(header, lines));
    }
    Ok(sales)
}

/// Header-only update; line rows are immutable after creation.
pub async fn update_header(aggregate: &Sale) -> crate::errors::Result<()> {
    let active = sale_row::ActiveModel {
        id: Set(aggregate.id.as_string()),
        user_id: Set(aggregate.user_id.clone()),
        payment_method_id: Set(aggregate.payment_method_id.clone()),
        shipping_method_id: Set(aggregate.shipping_method_id.clone()),
        status_id: Set(aggregate.status_id.clone()),
        purchase_date: Set(aggregate.purchase_date),
        purchase_time: Set(aggregate.purchase_time),
        created_at: sea_orm::ActiveValue::NotSet,
        updated_at: Set(aggregate.metadata.updated_at),
        version: Set(aggregate.metadata.version),
    };
    active.update(conn()).await?;
    Ok(())
}

/// Remove the sale and its owned lines in one transaction.
pub async fn delete(id: uuid::Uuid) -> crate::errors::Result<bool> {
    let txn = conn().begin().await?;

    line_row::Entity::delete_many()
        .filter(line_row::Column::SaleId.eq(id.to_string()))
        .exec(&txn)
        .await?;
    let result = sale_row::Entity::delete_by_id(id.to_string())
        .exec(&txn)
        .await?;

    txn.commit().await?;
    Ok(result.rows_affected > 0)
}
