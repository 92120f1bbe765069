use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of an ethnic group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EthnicGroupId(pub Uuid);

impl EthnicGroupId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for EthnicGroupId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(EthnicGroupId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// An ethnic group whose culture the platform documents
///
/// Languages and user accounts reference ethnic groups; removing a group
/// leaves those references dangling (no-action policy).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EthnicGroup {
    #[serde(flatten)]
    pub base: BaseAggregate<EthnicGroupId>,

    pub name: String,
    pub description: String,
    /// History of the group, free text
    pub history: String,
}

impl EthnicGroup {
    /// Create a new ethnic group for insertion into the database
    pub fn new_for_insert(name: String, description: String, history: String) -> Self {
        Self {
            base: BaseAggregate::new(EthnicGroupId::new_v4()),
            name,
            description,
            history,
        }
    }

    /// Get the ID as a string
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Apply DTO data to the aggregate
    pub fn update(&mut self, dto: &EthnicGroupDto) {
        self.name = dto.name.clone();
        self.description = dto.description.clone();
        self.history = dto.history.clone();
    }

    /// Validate field constraints
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Le nom de l'ethnie ne peut pas être vide".into());
        }
        if self.name.chars().count() > 255 {
            return Err("Le nom de l'ethnie est limité à 255 caractères".into());
        }
        if self.description.trim().is_empty() {
            return Err("La description ne peut pas être vide".into());
        }
        Ok(())
    }

    /// Hook executed before every write
    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for EthnicGroup {
    type Id = EthnicGroupId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "ethnic_group"
    }

    fn element_name() -> &'static str {
        "Ethnie"
    }

    fn list_name() -> &'static str {
        "Ethnies"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating or updating an ethnic group
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EthnicGroupDto {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub history: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_name() {
        let group = EthnicGroup::new_for_insert(
            "  ".into(),
            "description".into(),
            "histoire".into(),
        );
        assert!(group.validate().is_err());
    }

    #[test]
    fn test_display_name_is_group_name() {
        let group = EthnicGroup::new_for_insert(
            "Bamiléké".into(),
            "Peuple des hauts plateaux".into(),
            "histoire".into(),
        );
        assert_eq!(group.display_name(), "Bamiléké");
    }
}
