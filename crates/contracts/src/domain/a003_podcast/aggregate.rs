use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::podcast_category::PodcastCategory;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Upload directory for podcast cover images
pub const PHOTO_UPLOAD_DIR: &str = "podcast_pictures/";

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a podcast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PodcastId(pub Uuid);

impl PodcastId {
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

impl AggregateId for PodcastId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PodcastId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// An audio publication, either learning or discovery material
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Podcast {
    #[serde(flatten)]
    pub base: BaseAggregate<PodcastId>,

    pub title: String,
    pub description: String,

    /// Cover image path under PHOTO_UPLOAD_DIR
    #[serde(rename = "photoPath")]
    pub photo_path: Option<String>,

    pub category: PodcastCategory,
}

impl Podcast {
    pub fn new_for_insert(
        title: String,
        description: String,
        photo_path: Option<String>,
        category: PodcastCategory,
    ) -> Self {
        Self {
            base: BaseAggregate::new(PodcastId::new_v4()),
            title,
            description,
            photo_path,
            category,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &PodcastDto) {
        self.title = dto.title.clone();
        self.description = dto.description.clone();
        self.photo_path = dto.photo_path.clone();
        self.category = dto.category;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Le titre du podcast ne peut pas être vide".into());
        }
        if self.title.chars().count() > 255 {
            return Err("Le titre du podcast est limité à 255 caractères".into());
        }
        if self.description.trim().is_empty() {
            return Err("La description ne peut pas être vide".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Podcast {
    type Id = PodcastId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn display_name(&self) -> String {
        self.title.clone()
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "podcast"
    }

    fn element_name() -> &'static str {
        "Podcast"
    }

    fn list_name() -> &'static str {
        "Podcasts"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating or updating a podcast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PodcastDto {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(rename = "photoPath")]
    pub photo_path: Option<String>,
    pub category: PodcastCategory,
}
