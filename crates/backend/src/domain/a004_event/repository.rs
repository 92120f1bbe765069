use chrono::{NaiveDate, Utc};
use contracts::domain::a004_event::aggregate::{Event, EventId};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a004_event")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
    pub location: String,
    pub status: String,
    /// Decimal stored as TEXT to keep exact two-digit amounts
    pub entry_price: String,
    pub seats_available: i32,
    pub photo_path: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Event {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        Event {
            base: BaseAggregate::with_metadata(EventId(uuid), metadata),
            name: m.name,
            description: m.description,
            date: m.date,
            location: m.location,
            status: m.status,
            entry_price: m.entry_price.parse().unwrap_or(Decimal::ZERO),
            seats_available: m.seats_available,
            photo_path: m.photo_path,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Upcoming first
pub async fn list_all() -> anyhow::Result<Vec<Event>> {
    let items = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_asc(Column::Date)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Event>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &Event) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        name: Set(aggregate.name.clone()),
        description: Set(aggregate.description.clone()),
        date: Set(aggregate.date),
        location: Set(aggregate.location.clone()),
        status: Set(aggregate.status.clone()),
        entry_price: Set(aggregate.entry_price.to_string()),
        seats_available: Set(aggregate.seats_available),
        photo_path: Set(aggregate.photo_path.clone()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &Event) -> anyhow::Result<()> {
    let id = aggregate.base.id.value().to_string();
    let active = ActiveModel {
        id: Set(id),
        name: Set(aggregate.name.clone()),
        description: Set(aggregate.description.clone()),
        date: Set(aggregate.date),
        location: Set(aggregate.location.clone()),
        status: Set(aggregate.status.clone()),
        entry_price: Set(aggregate.entry_price.to_string()),
        seats_available: Set(aggregate.seats_available),
        photo_path: Set(aggregate.photo_path.clone()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
        created_at: sea_orm::ActiveValue::NotSet,
    };
    active.update(conn()).await?;
    Ok(())
}

pub async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}
