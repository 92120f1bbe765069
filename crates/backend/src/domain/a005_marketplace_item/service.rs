use super::repository;
use contracts::domain::a005_marketplace_item::aggregate::{MarketplaceItem, MarketplaceItemDto};
use uuid::Uuid;

/// Create a new marketplace item
pub async fn create(dto: MarketplaceItemDto) -> anyhow::Result<Uuid> {
    let mut aggregate = MarketplaceItem::new_for_insert(
        dto.title,
        dto.author,
        dto.price,
        dto.description,
        dto.photo_path,
    );

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    repository::insert(&aggregate).await
}

/// Update an existing marketplace item
pub async fn update(dto: MarketplaceItemDto) -> anyhow::Result<()> {
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

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<MarketplaceItem>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<MarketplaceItem>> {
    repository::list_all().await
}
