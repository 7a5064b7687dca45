use contracts::domain::a016_purchase_link::aggregate::{PurchaseLink, PurchaseLinkId};
use contracts::domain::common::{AggregateId, EntityMetadata};
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a016_purchase_link")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub product_id: String,
    pub store: String,
    pub url: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for PurchaseLink {
    fn from(m: Model) -> Self {
        let uuid = uuid::Uuid::parse_str(&m.id).unwrap_or_else(|_| uuid::Uuid::new_v4());
        PurchaseLink {
            id: PurchaseLinkId::new(uuid),
            product_id: m.product_id,
            store: m.store,
            url: m.url,
            metadata: EntityMetadata::restored(m.created_at, m.updated_at, m.version),
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_by_product(product_id: uuid::Uuid) -> crate::errors::Result<Vec<PurchaseLink>> {
    let items = Entity::find()
        .filter(Column::ProductId.eq(product_id.to_string()))
        .order_by_asc(Column::Store)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: uuid::Uuid) -> crate::errors::Result<Option<PurchaseLink>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &PurchaseLink) -> crate::errors::Result<uuid::Uuid> {
    let uuid = aggregate.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        product_id: Set(aggregate.product_id.clone()),
        store: Set(aggregate.store.clone()),
        url: Set(aggregate.url.clone()),
        created_at: Set(aggregate.metadata.created_at),
        updated_at: Set(aggregate.metadata.updated_at),
        version: Set(aggregate.metadata.version),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &PurchaseLink) -> crate::errors::Result<()> {
    let active = ActiveModel {
        id: Set(aggregate.id.as_string()),
        product_id: Set(aggregate.product_id.clone()),
        store: Set(aggregate.store.clone()),
        url: Set(aggregate.url.clone()),
        created_at: sea_orm::ActiveValue::NotSet,
        updated_at: Set(aggregate.metadata.updated_at),
        version: Set(aggregate.metadata.version),
    };
    active.update(conn()).await?;
    Ok(())
}

pub async fn delete(id: uuid::Uuid) -> crate::errors::Result<bool> {
    let result = Entity::delete_by_id(id.to_string()).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
