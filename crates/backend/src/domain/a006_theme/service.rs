use super::repository;
use contracts::domain::a006_theme::aggregate::{Theme, ThemeDto};
use uuid::Uuid;

/// Create a new theme
pub async fn create(dto: ThemeDto) -> anyhow::Result<Uuid> {
    let mut aggregate = Theme::new_for_insert(dto.name, dto.description);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    repository::insert(&aggregate).await
}

/// Update an existing theme
pub async fn update(dto: ThemeDto) -> anyhow::Result<()> {
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

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Theme>> {
    repository::get_by_id(id).await
}

/// List themes, optionally filtered by a search term
pub async fn list_all(search: Option<&str>) -> anyhow::Result<Vec<Theme>> {
    match search {
        Some(term) if !term.trim().is_empty() => repository::search(term.trim()).await,
        _ => repository::list_all().await,
    }
}

/// Seed reference data
pub async fn insert_test_data() -> anyhow::Result<()> {
    let data = vec![
        ThemeDto {
            id: None,
            name: "Salutations".into(),
            description: "Formules de politesse et premiers échanges".into(),
        },
        ThemeDto {
            id: None,
            name: "Cuisine".into(),
            description: "Vocabulaire des plats et des ingrédients".into(),
        },
        ThemeDto {
            id: None,
            name: "Contes et proverbes".into(),
            description: "Tradition orale et sagesse populaire".into(),
        },
    ];

    for dto in data {
        create(dto).await?;
    }

    Ok(())
}
