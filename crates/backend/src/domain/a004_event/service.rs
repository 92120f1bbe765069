use super::repository;
use contracts::domain::a004_event::aggregate::{Event, EventDto};
use uuid::Uuid;

/// Create a new event
pub async fn create(dto: EventDto) -> anyhow::Result<Uuid> {
    let mut aggregate = Event::new_for_insert(
        dto.name,
        dto.description,
        dto.date,
        dto.location,
        dto.status,
        dto.entry_price,
        dto.seats_available,
        dto.photo_path,
    );

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    repository::insert(&aggregate).await
}

/// Update an existing event
pub async fn update(dto: EventDto) -> anyhow::Result<()> {
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

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Event>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Event>> {
    repository::list_all().await
}
