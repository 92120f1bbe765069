use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThemeId(pub Uuid);

impl ThemeId {
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

impl AggregateId for ThemeId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ThemeId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A thematic tag attached to courses (many-to-many)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    #[serde(flatten)]
    pub base: BaseAggregate<ThemeId>,

    pub name: String,
    pub description: String,
}

impl Theme {
    pub fn new_for_insert(name: String, description: String) -> Self {
        Self {
            base: BaseAggregate::new(ThemeId::new_v4()),
            name,
            description,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &ThemeDto) {
        self.name = dto.name.clone();
        self.description = dto.description.clone();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Le nom de la thématique ne peut pas être vide".into());
        }
        if self.name.chars().count() > 255 {
            return Err("Le nom de la thématique est limité à 255 caractères".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Theme {
    type Id = ThemeId;

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
        "a006"
    }

    fn collection_name() -> &'static str {
        "theme"
    }

    fn element_name() -> &'static str {
        "Thématique"
    }

    fn list_name() -> &'static str {
        "Thématiques"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating or updating a theme
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ThemeDto {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
}
