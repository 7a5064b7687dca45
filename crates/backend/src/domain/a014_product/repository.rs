use contracts::domain::a014_product::aggregate::{Product, ProductId};
use contracts::domain::common::{AggregateId, EntityMetadata};
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DatabaseBackend, QueryOrder, Set, Statement, TransactionTrait};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a014_product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub product_type_id: String,
    pub classification_id: String,
    pub status_id: String,
    pub saga_id: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(m: Model) -> Self {
        let uuid = uuid::Uuid::parse_str(&m.id).unwrap_or_else(|_| uuid::Uuid::new_v4());
        Product {
            id: ProductId::new(uuid),
            name: m.name,
            description: m.description,
            price: m.price,
            product_type_id: m.product_type_id,
            classification_id: m.classification_id,
            status_id: m.status_id,
            saga_id: m.saga_id,
            metadata: EntityMetadata::restored(m.created_at, m.updated_at, m.version),
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> crate::errors::Result<Vec<Product>> {
    let items = Entity::find()
        .order_by_asc(Column::Name)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: uuid::Uuid) -> crate::errors::Result<Option<Product>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn exists(id: uuid::Uuid) -> crate::errors::Result<bool> {
    Ok(Entity::find_by_id(id.to_string())
        .one(conn())
        .await?
        .is_some())
}

pub async fn insert(aggregate: &Product) -> crate::errors::Result<uuid::Uuid> {
    let uuid = aggregate.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        name: Set(aggregate.name.clone()),
        description: Set(aggregate.description.clone()),
        price: Set(aggregate.price),
        product_type_id: Set(aggregate.product_type_id.clone()),
        classification_id: Set(aggregate.classification_id.clone()),
        status_id: Set(aggregate.status_id.clone()),
        saga_id: Set(aggregate.saga_id.clone()),
        created_at: Set(aggregate.metadata.created_at),
        updated_at: Set(aggregate.metadata.updated_at),
        version: Set(aggregate.metadata.version),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &Product) -> crate::errors::Result<()> {
    let active = ActiveModel {
        id: Set(aggregate.id.as_string()),
        name: Set(aggregate.name.clone()),
        description: Set(aggregate.description.clone()),
        price: Set(aggregate.price),
        product_type_id: Set(aggregate.product_type_id.clone()),
        classification_id: Set(aggregate.classification_id.clone()),
        status_id: Set(aggregate.status_id.clone()),
        saga_id: Set(aggregate.saga_id.clone()),
        created_at: sea_orm::ActiveValue::NotSet,
        updated_at: Set(aggregate.metadata.updated_at),
        version: Set(aggregate.metadata.version),
    };
    active.update(conn()).await?;
    Ok(())
}

/// Tables holding rows owned by a product, removed together with it.
const OWNED_TABLES: &[&str] = &[
    "a015_product_image",
    "a016_purchase_link",
    "a014_product_genre",
    "a014_product_platform",
    "a014_product_developer",
    "a014_product_company",
];

/// Delete the product together with its owned images, purchase links, and
/// bridge rows in one transaction.
pub async fn delete(id: uuid::Uuid) -> crate::errors::Result<bool> {
    let txn = conn().begin().await?;

    for table in OWNED_TABLES {
        txn.execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            &format!("DELETE FROM {table} WHERE product_id = ?"),
            [id.to_string().into()],
        ))
        .await?;
    }

    let result = Entity::delete_by_id(id.to_string()).exec(&txn).await?;
    txn.commit().await?;
    Ok(result.rows_affected > 0)
}
