use super::repository;
use contracts::domain::a002_language::aggregate::LanguageId;
use contracts::domain::a006_theme::aggregate::ThemeId;
use contracts::domain::a007_course::aggregate::{Course, CourseDto};
use uuid::Uuid;

/// Resolve the language reference; the language must exist at write time
async fn resolve_language(id: &str) -> anyhow::Result<LanguageId> {
    let uuid = Uuid::parse_str(id).map_err(|_| anyhow::anyhow!("Invalid language ID"))?;
    crate::domain::a002_language::repository::get_by_id(uuid)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Language not found"))?;
    Ok(LanguageId(uuid))
}

/// Resolve theme references; every tag must exist at write time
async fn resolve_themes(ids: &[String]) -> anyhow::Result<Vec<ThemeId>> {
    let mut resolved = Vec::with_capacity(ids.len());
    for id in ids {
        let uuid = Uuid::parse_str(id).map_err(|_| anyhow::anyhow!("Invalid theme ID"))?;
        crate::domain::a006_theme::repository::get_by_id(uuid)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Theme not found: {}", id))?;
        resolved.push(ThemeId(uuid));
    }
    Ok(resolved)
}

/// The authoring account must exist; courses are removed with it
async fn check_author(author_id: &str) -> anyhow::Result<()> {
    crate::system::users::repository::get_by_id(author_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Author account not found"))?;
    Ok(())
}

/// Create a new course
pub async fn create(dto: CourseDto) -> anyhow::Result<Uuid> {
    let language_id = resolve_language(&dto.language_id).await?;
    let theme_ids = resolve_themes(&dto.theme_ids).await?;
    check_author(&dto.author_id).await?;

    let mut aggregate = Course::new_for_insert(
        dto.title,
        dto.description,
        language_id,
        dto.photo_path,
        dto.author_id,
        theme_ids,
        dto.availability,
    );

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    repository::insert(&aggregate).await
}

/// Update an existing course; the author is fixed at creation
pub async fn update(dto: CourseDto) -> anyhow::Result<()> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| anyhow::anyhow!("Invalid ID"))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;

    let language_id = resolve_language(&dto.language_id).await?;
    let theme_ids = resolve_themes(&dto.theme_ids).await?;

    aggregate.update(&dto, language_id, theme_ids);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    repository::update(&aggregate).await
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Course>> {
    repository::get_by_id(id).await
}

/// List courses, optionally filtered by a search term
pub async fn list_all(search: Option<&str>) -> anyhow::Result<Vec<Course>> {
    match search {
        Some(term) if !term.trim().is_empty() => repository::search(term.trim()).await,
        _ => repository::list_all().await,
    }
}

pub async fn list_by_author(author_id: &str) -> anyhow::Result<Vec<Course>> {
    repository::list_by_author(author_id).await
}
