use crate::domain::a007_course::aggregate::CourseId;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Upload directory for lesson videos and documents
pub const FILE_UPLOAD_DIR: &str = "file_reference/";

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a lesson
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LessonId(pub Uuid);

impl LessonId {
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

impl AggregateId for LessonId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(LessonId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// One lesson of a course, with optional video and document attachments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    #[serde(flatten)]
    pub base: BaseAggregate<LessonId>,

    pub title: String,

    /// Video file path under FILE_UPLOAD_DIR
    #[serde(rename = "videoPath")]
    pub video_path: Option<String>,

    /// Document file path under FILE_UPLOAD_DIR
    #[serde(rename = "documentPath")]
    pub document_path: Option<String>,

    #[serde(rename = "courseId")]
    pub course_id: CourseId,
}

impl Lesson {
    pub fn new_for_insert(
        title: String,
        video_path: Option<String>,
        document_path: Option<String>,
        course_id: CourseId,
    ) -> Self {
        Self {
            base: BaseAggregate::new(LessonId::new_v4()),
            title,
            video_path,
            document_path,
            course_id,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &LessonDto, course_id: CourseId) {
        self.title = dto.title.clone();
        self.video_path = dto.video_path.clone();
        self.document_path = dto.document_path.clone();
        self.course_id = course_id;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Le titre de la leçon ne peut pas être vide".into());
        }
        if self.title.chars().count() > 255 {
            return Err("Le titre de la leçon est limité à 255 caractères".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Lesson {
    type Id = LessonId;

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
        "a008"
    }

    fn collection_name() -> &'static str {
        "lesson"
    }

    fn element_name() -> &'static str {
        "Leçon"
    }

    fn list_name() -> &'static str {
        "Leçons"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating or updating a lesson
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonDto {
    pub id: Option<String>,
    pub title: String,
    #[serde(rename = "videoPath")]
    pub video_path: Option<String>,
    #[serde(rename = "documentPath")]
    pub document_path: Option<String>,
    #[serde(rename = "courseId")]
    pub course_id: String,
}
