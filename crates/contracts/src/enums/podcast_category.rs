use serde::{Deserialize, Serialize};

/// Section a podcast belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PodcastCategory {
    /// Learning material
    ToLearn,
    /// Discovery material
    ToDiscover,
}

impl PodcastCategory {
    /// Stored code
    pub fn code(&self) -> &'static str {
        match self {
            PodcastCategory::ToLearn => "apprendre",
            PodcastCategory::ToDiscover => "decouvrir",
        }
    }

    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            PodcastCategory::ToLearn => "À apprendre",
            PodcastCategory::ToDiscover => "À découvrir",
        }
    }

    pub fn all() -> Vec<PodcastCategory> {
        vec![PodcastCategory::ToLearn, PodcastCategory::ToDiscover]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "apprendre" => Some(PodcastCategory::ToLearn),
            "decouvrir" => Some(PodcastCategory::ToDiscover),
            _ => None,
        }
    }
}

impl std::fmt::Display for PodcastCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
