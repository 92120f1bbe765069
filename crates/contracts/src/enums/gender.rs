use serde::{Deserialize, Serialize};

/// Gender of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Stored code
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Male => "homme",
            Gender::Female => "femme",
        }
    }

    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "Masculin",
            Gender::Female => "Féminin",
        }
    }

    pub fn all() -> Vec<Gender> {
        vec![Gender::Male, Gender::Female]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "homme" => Some(Gender::Male),
            "femme" => Some(Gender::Female),
            _ => None,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
