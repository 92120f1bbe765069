use serde::{Deserialize, Serialize};

/// Enrollment availability of a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseAvailability {
    /// Open for enrollment
    Open,
    /// Coming soon
    Soon,
    /// Currently running
    InProgress,
    /// Archived
    Archived,
}

impl CourseAvailability {
    /// Stored code
    pub fn code(&self) -> &'static str {
        match self {
            CourseAvailability::Open => "ouvert",
            CourseAvailability::Soon => "bientot",
            CourseAvailability::InProgress => "en_cours",
            CourseAvailability::Archived => "archive",
        }
    }

    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            CourseAvailability::Open => "Ouvert pour inscription",
            CourseAvailability::Soon => "Bientôt",
            CourseAvailability::InProgress => "En cours",
            CourseAvailability::Archived => "Archivé",
        }
    }

    pub fn all() -> Vec<CourseAvailability> {
        vec![
            CourseAvailability::Open,
            CourseAvailability::Soon,
            CourseAvailability::InProgress,
            CourseAvailability::Archived,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ouvert" => Some(CourseAvailability::Open),
            "bientot" => Some(CourseAvailability::Soon),
            "en_cours" => Some(CourseAvailability::InProgress),
            "archive" => Some(CourseAvailability::Archived),
            _ => None,
        }
    }
}

/// A course with no explicit availability is considered running
impl Default for CourseAvailability {
    fn default() -> Self {
        CourseAvailability::InProgress
    }
}

impl std::fmt::Display for CourseAvailability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_in_progress() {
        assert_eq!(CourseAvailability::default(), CourseAvailability::InProgress);
        assert_eq!(CourseAvailability::default().code(), "en_cours");
    }

    #[test]
    fn test_from_code_rejects_unknown() {
        assert_eq!(CourseAvailability::from_code("ferme"), None);
    }
}
