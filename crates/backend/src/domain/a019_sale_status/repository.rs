use contracts::domain::common::{AggregateId, EntityMetadata};
use contracts::domain::a019_sale_status::aggregate::{SaleStatus, SaleStatusId};
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a019_sale_status")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for SaleStatus {
    fn from(m: Model) -> Self {
        let uuid = uuid::Uuid::parse_str(&m.id).unwrap_or_else(|_| uuid::Uuid::new_v4());
        SaleStatus {
            id: SaleStatusId::new(uuid),
            name: m.name,
            metadata: EntityMetadata::restored(m.created_at, m.updated_at, m.version),
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> crate::errors::Result<Vec<SaleStatus>> {
    let items = Entity::find()
        .order_by_asc(Column::Name)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: uuid::Uuid) -> crate::errors::Result<Option<SaleStatus>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn exists(id: uuid::Uuid) -> crate::errors::Result<bool> {
    Ok(Entity::find_by_id(id.to_string())
        .one(conn())
        .await?
        .is_some())
}

pub async fn insert(aggregate: &SaleStatus) -> crate::errors::Result<uuid::Uuid> {
    let uuid = aggregate.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        name: Set(aggregate.name.clone()),
        created_at: Set(aggregate.metadata.created_at),
        updated_at: Set(aggregate.metadata.updated_at),
        version: Set(aggregate.metadata.version),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &SaleStatus) -> crate::errors::Result<()> {
    let active = ActiveModel {
        id: Set(aggregate.id.as_string()),
        name: Set(aggregate.name.clone()),
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
