use super::repository;
use contracts::domain::a001_ethnic_group::aggregate::EthnicGroupId;
use contracts::domain::a002_language::aggregate::{Language, LanguageDto};
use uuid::Uuid;

/// Resolve the ethnic group reference; the group must exist at write time
async fn resolve_ethnic_group(id: &str) -> anyhow::Result<EthnicGroupId> {
    let uuid =
        Uuid::parse_str(id).map_err(|_| anyhow::anyhow!("Invalid ethnic group ID"))?;
    crate::domain::a001_ethnic_group::repository::get_by_id(uuid)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Ethnic group not found"))?;
    Ok(EthnicGroupId(uuid))
}

/// Create a new language
pub async fn create(dto: LanguageDto) -> anyhow::Result<Uuid> {
    let ethnic_group_id = resolve_ethnic_group(&dto.ethnic_group_id).await?;

    let mut aggregate = Language::new_for_insert(dto.name, ethnic_group_id);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    repository::insert(&aggregate).await
}

/// Update an existing language
pub async fn update(dto: LanguageDto) -> anyhow::Result<()> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| anyhow::anyhow!("Invalid ID"))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;

    let ethnic_group_id = resolve_ethnic_group(&dto.ethnic_group_id).await?;
    aggregate.update(&dto, ethnic_group_id);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    repository::update(&aggregate).await
}

/// Soft delete a language
///
/// No-action policy: courses referencing it keep a dangling reference.
pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Language>> {
    repository::get_by_id(id).await
}

/// List languages, optionally filtered by a search term
pub async fn list_all(search: Option<&str>) -> anyhow::Result<Vec<Language>> {
    match search {
        Some(term) if !term.trim().is_empty() => repository::search(term.trim()).await,
        _ => repository::list_all().await,
    }
}

pub async fn list_by_ethnic_group(group_id: Uuid) -> anyhow::Result<Vec<Language>> {
    repository::list_by_ethnic_group(group_id).await
}
