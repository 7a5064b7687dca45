use contracts::domain::a003_address::aggregate::{Address, AddressId};
use contracts::domain::common::{AggregateId, EntityMetadata};
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a003_address")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub street: String,
    pub number: String,
    pub extra: Option<String>,
    pub commune_id: String,
    pub user_id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Address {
    fn from(m: Model) -> Self {
        let uuid = uuid::Uuid::parse_str(&m.id).unwrap_or_else(|_| uuid::Uuid::new_v4());
        Address {
            id: AddressId::new(uuid),
            street: m.street,
            number: m.number,
            extra: m.extra,
            commune_id: m.commune_id,
            user_id: m.user_id,
            metadata: EntityMetadata::restored(m.created_at, m.updated_at, m.version),
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> crate::errors::Result<Vec<Address>> {
    let items = Entity::find()
        .order_by_asc(Column::Street)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: uuid::Uuid) -> crate::errors::Result<Option<Address>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn get_by_user(user_id: &str) -> crate::errors::Result<Option<Address>> {
    let result = Entity::find()
        .filter(Column::UserId.eq(user_id))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &Address) -> crate::errors::Result<uuid::Uuid> {
    let uuid = aggregate.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        street: Set(aggregate.street.clone()),
        number: Set(aggregate.number.clone()),
        extra: Set(aggregate.extra.clone()),
        commune_id: Set(aggregate.commune_id.clone()),
        user_id: Set(aggregate.user_id.clone()),
        created_at: Set(aggregate.metadata.created_at),
        updated_at: Set(aggregate.metadata.updated_at),
        version: Set(aggregate.metadata.version),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &Address) -> crate::errors::Result<()> {
    let active = ActiveModel {
        id: Set(aggregate.id.as_string()),
        street: Set(aggregate.street.clone()),
        number: Set(aggregate.number.clone()),
        extra: Set(aggregate.extra.clone()),
        commune_id: Set(aggregate.commune_id.clone()),
        user_id: Set(aggregate.user_id.clone()),
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

/// Remove a user's address when the account goes away.
pub async fn delete_by_user(user_id: &str) -> crate::errors::Result<u64> {
    let result = Entity::delete_many()
        .filter(Column::UserId.eq(user_id))
        .exec(conn())
        .await?;
    Ok(result.rows_affected)
}
