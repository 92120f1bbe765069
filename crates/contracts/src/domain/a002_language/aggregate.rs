use crate::domain::a001_ethnic_group::aggregate::EthnicGroupId;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguageId(pub Uuid);

impl LanguageId {
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

impl AggregateId for LanguageId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(LanguageId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A language taught on the platform, spoken by one ethnic group
///
/// The ethnic group reference is not enforced at delete time: removing the
/// group keeps the language with a dangling reference (no-action policy).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Language {
    #[serde(flatten)]
    pub base: BaseAggregate<LanguageId>,

    pub name: String,

    #[serde(rename = "ethnicGroupId")]
    pub ethnic_group_id: EthnicGroupId,
}

impl Language {
    /// Create a new language for insertion into the database
    pub fn new_for_insert(name: String, ethnic_group_id: EthnicGroupId) -> Self {
        Self {
            base: BaseAggregate::new(LanguageId::new_v4()),
            name,
            ethnic_group_id,
        }
    }

    /// Get the ID as a string
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Apply DTO data to the aggregate; the ethnic group reference is
    /// resolved by the service
    pub fn update(&mut self, dto: &LanguageDto, ethnic_group_id: EthnicGroupId) {
        self.name = dto.name.clone();
        self.ethnic_group_id = ethnic_group_id;
    }

    /// Validate field constraints
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Le nom de la langue ne peut pas être vide".into());
        }
        if self.name.chars().count() > 255 {
            return Err("Le nom de la langue est limité à 255 caractères".into());
        }
        Ok(())
    }

    /// Hook executed before every write
    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Language {
    type Id = LanguageId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "language"
    }

    fn element_name() -> &'static str {
        "Langue"
    }

    fn list_name() -> &'static str {
        "Langues"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating or updating a language
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LanguageDto {
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "ethnicGroupId")]
    pub ethnic_group_id: String,
}
