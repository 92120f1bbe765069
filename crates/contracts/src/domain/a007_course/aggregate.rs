use crate::domain::a002_language::aggregate::LanguageId;
use crate::domain::a006_theme::aggregate::ThemeId;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::course_availability::CourseAvailability;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Upload directory for course cover images
pub const PHOTO_UPLOAD_DIR: &str = "courses_pictures/";

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseId(pub Uuid);

impl CourseId {
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

impl AggregateId for CourseId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CourseId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A language course authored by one user
///
/// Courses are deleted together with their author (cascade). The language
/// reference follows the no-action policy and may dangle if the language
/// row is removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    #[serde(flatten)]
    pub base: BaseAggregate<CourseId>,

    pub title: String,
    pub description: String,

    #[serde(rename = "languageId")]
    pub language_id: LanguageId,

    /// Cover image path under PHOTO_UPLOAD_DIR
    #[serde(rename = "photoPath")]
    pub photo_path: Option<String>,

    /// Account ID of the authoring user
    #[serde(rename = "authorId")]
    pub author_id: String,

    /// Thematic tags, zero or more
    #[serde(rename = "themeIds")]
    pub theme_ids: Vec<ThemeId>,

    pub availability: CourseAvailability,
}

impl Course {
    pub fn new_for_insert(
        title: String,
        description: String,
        language_id: LanguageId,
        photo_path: Option<String>,
        author_id: String,
        theme_ids: Vec<ThemeId>,
        availability: Option<CourseAvailability>,
    ) -> Self {
        Self {
            base: BaseAggregate::new(CourseId::new_v4()),
            title,
            description,
            language_id,
            photo_path,
            author_id,
            theme_ids,
            availability: availability.unwrap_or_default(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Apply DTO data; references are resolved by the service
    pub fn update(&mut self, dto: &CourseDto, language_id: LanguageId, theme_ids: Vec<ThemeId>) {
        self.title = dto.title.clone();
        self.description = dto.description.clone();
        self.language_id = language_id;
        self.photo_path = dto.photo_path.clone();
        self.theme_ids = theme_ids;
        self.availability = dto.availability.unwrap_or_default();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Le titre du cours ne peut pas être vide".into());
        }
        if self.title.chars().count() > 255 {
            return Err("Le titre du cours est limité à 255 caractères".into());
        }
        if self.author_id.trim().is_empty() {
            return Err("Le cours doit avoir un auteur".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Course {
    type Id = CourseId;

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
        "a007"
    }

    fn collection_name() -> &'static str {
        "course"
    }

    fn element_name() -> &'static str {
        "Cours"
    }

    fn list_name() -> &'static str {
        "Cours"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating or updating a course
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseDto {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(rename = "languageId")]
    pub language_id: String,
    #[serde(rename = "photoPath")]
    pub photo_path: Option<String>,
    #[serde(rename = "authorId")]
    pub author_id: String,
    #[serde(rename = "themeIds", default)]
    pub theme_ids: Vec<String>,
    /// Defaults to "en_cours" when unset
    pub availability: Option<CourseAvailability>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_defaults_to_in_progress() {
        let course = Course::new_for_insert(
            "Douala pour débutants".into(),
            "Initiation".into(),
            LanguageId::new_v4(),
            None,
            Uuid::new_v4().to_string(),
            vec![],
            None,
        );
        assert_eq!(course.availability, CourseAvailability::InProgress);
    }
}
