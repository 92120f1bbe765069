use super::repository;
use contracts::domain::a001_ethnic_group::aggregate::{EthnicGroup, EthnicGroupDto};
use uuid::Uuid;

/// Create a new ethnic group
pub async fn create(dto: EthnicGroupDto) -> anyhow::Result<Uuid> {
    let mut aggregate =
        EthnicGroup::new_for_insert(dto.name, dto.description, dto.history);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    repository::insert(&aggregate).await
}

/// Update an existing ethnic group
pub async fn update(dto: EthnicGroupDto) -> anyhow::Result<()> {
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

/// Soft delete an ethnic group
///
/// No-action policy: dependent languages and users are untouched and
/// keep their reference.
pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<EthnicGroup>> {
    repository::get_by_id(id).await
}

/// List ethnic groups, optionally filtered by a search term
pub async fn list_all(search: Option<&str>) -> anyhow::Result<Vec<EthnicGroup>> {
    match search {
        Some(term) if !term.trim().is_empty() => repository::search(term.trim()).await,
        _ => repository::list_all().await,
    }
}

/// Seed reference data
pub async fn insert_test_data() -> anyhow::Result<()> {
    let data = vec![
        EthnicGroupDto {
            id: None,
            name: "Bamiléké".into(),
            description: "Peuple des hauts plateaux de l'Ouest".into(),
            history: "Installé dans la région des Grassfields depuis plusieurs siècles".into(),
        },
        EthnicGroupDto {
            id: None,
            name: "Douala".into(),
            description: "Peuple côtier du littoral".into(),
            history: "Peuple de pêcheurs et de commerçants de l'estuaire du Wouri".into(),
        },
        EthnicGroupDto {
            id: None,
            name: "Fulbé".into(),
            description: "Peuple pastoral du Nord".into(),
            history: "Présent dans la vallée de la Bénoué depuis le XIXe siècle".into(),
        },
    ];

    for dto in data {
        create(dto).await?;
    }

    Ok(())
}
