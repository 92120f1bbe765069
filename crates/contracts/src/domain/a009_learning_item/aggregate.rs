use crate::domain::a007_course::aggregate::CourseId;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a learning item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LearningItemId(pub Uuid);

impl LearningItemId {
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

impl AggregateId for LearningItemId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(LearningItemId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A free-text piece of learning content attached to a course
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningItem {
    #[serde(flatten)]
    pub base: BaseAggregate<LearningItemId>,

    pub content: String,

    #[serde(rename = "courseId")]
    pub course_id: CourseId,
}

impl LearningItem {
    pub fn new_for_insert(content: String, course_id: CourseId) -> Self {
        Self {
            base: BaseAggregate::new(LearningItemId::new_v4()),
            content,
            course_id,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &LearningItemDto, course_id: CourseId) {
        self.content = dto.content.clone();
        self.course_id = course_id;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.content.trim().is_empty() {
            return Err("Le contenu ne peut pas être vide".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for LearningItem {
    type Id = LearningItemId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn display_name(&self) -> String {
        // First words of the content serve as the label
        self.content.chars().take(48).collect()
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a009"
    }

    fn collection_name() -> &'static str {
        "learning_item"
    }

    fn element_name() -> &'static str {
        "Contenu à apprendre"
    }

    fn list_name() -> &'static str {
        "Contenus à apprendre"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating or updating a learning item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningItemDto {
    pub id: Option<String>,
    pub content: String,
    #[serde(rename = "courseId")]
    pub course_id: String,
}
