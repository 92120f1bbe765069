use chrono::Utc;
use contracts::domain::a002_language::aggregate::LanguageId;
use contracts::domain::a006_theme::aggregate::ThemeId;
use contracts::domain::a007_course::aggregate::{Course, CourseId};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::enums::course_availability::CourseAvailability;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseBackend, EntityTrait, QueryFilter, Set, Statement,
};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a007_course")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub description: String,
    pub language_id: String,
    pub photo_path: Option<String>,
    pub author_id: String,
    pub availability: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Theme links live in a separate table; the conversion leaves them empty
/// and the repository loads them afterwards.
impl From<Model> for Course {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        let language_uuid = Uuid::parse_str(&m.language_id).unwrap_or_else(|_| Uuid::new_v4());

        Course {
            base: BaseAggregate::with_metadata(CourseId(uuid), metadata),
            title: m.title,
            description: m.description,
            language_id: LanguageId(language_uuid),
            photo_path: m.photo_path,
            author_id: m.author_id,
            theme_ids: Vec::new(),
            availability: CourseAvailability::from_code(&m.availability).unwrap_or_default(),
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

async fn load_theme_ids(course_id: Uuid) -> anyhow::Result<Vec<ThemeId>> {
    let rows = conn()
        .query_all(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT theme_id FROM a007_course_theme WHERE course_id = ?",
            [course_id.to_string().into()],
        ))
        .await?;

    let mut ids = Vec::with_capacity(rows.len());
    for row in rows {
        let raw: String = row.try_get("", "theme_id")?;
        if let Ok(uuid) = Uuid::parse_str(&raw) {
            ids.push(ThemeId(uuid));
        }
    }
    Ok(ids)
}

/// Replace all theme links of a course
async fn set_theme_ids(course_id: Uuid, theme_ids: &[ThemeId]) -> anyhow::Result<()> {
    conn()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "DELETE FROM a007_course_theme WHERE course_id = ?",
            [course_id.to_string().into()],
        ))
        .await?;

    for theme_id in theme_ids {
        conn()
            .execute(Statement::from_sql_and_values(
                DatabaseBackend::Sqlite,
                "INSERT INTO a007_course_theme (course_id, theme_id) VALUES (?, ?)",
                [
                    course_id.to_string().into(),
                    theme_id.value().to_string().into(),
                ],
            ))
            .await?;
    }
    Ok(())
}

async fn with_themes(model: Model) -> anyhow::Result<Course> {
    let mut course: Course = model.into();
    course.theme_ids = load_theme_ids(course.base.id.value()).await?;
    Ok(course)
}

pub async fn list_all() -> anyhow::Result<Vec<Course>> {
    let models = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?;

    let mut items = Vec::with_capacity(models.len());
    for model in models {
        items.push(with_themes(model).await?);
    }
    items.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
    Ok(items)
}

/// Free-text search over the admin search fields (title, description)
pub async fn search(term: &str) -> anyhow::Result<Vec<Course>> {
    let models = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .filter(
            Column::Title
                .contains(term)
                .or(Column::Description.contains(term)),
        )
        .all(conn())
        .await?;

    let mut items = Vec::with_capacity(models.len());
    for model in models {
        items.push(with_themes(model).await?);
    }
    items.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
    Ok(items)
}

pub async fn list_by_author(author_id: &str) -> anyhow::Result<Vec<Course>> {
    let models = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .filter(Column::AuthorId.eq(author_id))
        .all(conn())
        .await?;

    let mut items = Vec::with_capacity(models.len());
    for model in models {
        items.push(with_themes(model).await?);
    }
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Course>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    match result {
        Some(model) => Ok(Some(with_themes(model).await?)),
        None => Ok(None),
    }
}

pub async fn insert(aggregate: &Course) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        title: Set(aggregate.title.clone()),
        description: Set(aggregate.description.clone()),
        language_id: Set(aggregate.language_id.value().to_string()),
        photo_path: Set(aggregate.photo_path.clone()),
        author_id: Set(aggregate.author_id.clone()),
        availability: Set(aggregate.availability.code().to_string()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    };
    active.insert(conn()).await?;
    set_theme_ids(uuid, &aggregate.theme_ids).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &Course) -> anyhow::Result<()> {
    let uuid = aggregate.base.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        title: Set(aggregate.title.clone()),
        description: Set(aggregate.description.clone()),
        language_id: Set(aggregate.language_id.value().to_string()),
        photo_path: Set(aggregate.photo_path.clone()),
        author_id: Set(aggregate.author_id.clone()),
        availability: Set(aggregate.availability.code().to_string()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
        created_at: sea_orm::ActiveValue::NotSet,
    };
    active.update(conn()).await?;
    set_theme_ids(uuid, &aggregate.theme_ids).await?;
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

/// Hard delete of all courses authored by one user, links included.
/// Used by the account cascade.
pub async fn delete_by_author(author_id: &str) -> anyhow::Result<u64> {
    conn()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "DELETE FROM a007_course_theme WHERE course_id IN \
             (SELECT id FROM a007_course WHERE author_id = ?)",
            [author_id.into()],
        ))
        .await?;

    let result = conn()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "DELETE FROM a007_course WHERE author_id = ?",
            [author_id.into()],
        ))
        .await?;

    Ok(result.rows_affected())
}
