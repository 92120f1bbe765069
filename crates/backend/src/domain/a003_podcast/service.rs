use super::repository;
use contracts::domain::a003_podcast::aggregate::{Podcast, PodcastDto};
use contracts::enums::podcast_category::PodcastCategory;
use uuid::Uuid;

/// Create a new podcast
pub async fn create(dto: PodcastDto) -> anyhow::Result<Uuid> {
    let mut aggregate =
        Podcast::new_for_insert(dto.title, dto.description, dto.photo_path, dto.category);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    repository::insert(&aggregate).await
}

/// Update an existing podcast
pub async fn update(dto: PodcastDto) -> anyhow::Result<()> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| anyhow::anyhow!("Invalid ID"))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;

    aggregate.update(&dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    repository::update(&aggregate).await
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Podcast>> {
    repository::get_by_id(id).await
}

/// List podcasts, optionally restricted to one category code
pub async fn list_all(category: Option<&str>) -> anyhow::Result<Vec<Podcast>> {
    match category {
        Some(code) => {
            let category = PodcastCategory::from_code(code)
                .ok_or_else(|| anyhow::anyhow!("Unknown podcast category: {}", code))?;
            repository::list_by_category(category).await
        }
        None => repository::list_all().await,
    }
}
