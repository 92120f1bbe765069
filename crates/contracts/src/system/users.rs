use crate::enums::gender::Gender;
use serde::{Deserialize, Serialize};

/// Upload directory for user profile pictures
pub const PHOTO_UPLOAD_DIR: &str = "profile_pictures/";

/// A user account; the e-mail address is the sole login identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    /// Unique, normalized e-mail address
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<Gender>,
    /// Ethnic group reference, no-action on delete
    pub ethnic_group_id: Option<String>,
    /// Profile picture path under PHOTO_UPLOAD_DIR
    pub photo_path: Option<String>,
    pub is_active: bool,
    /// Grants access to the administration screens
    pub is_staff: bool,
    /// Grants every permission
    pub is_superuser: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl User {
    /// Full name used as the display label
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// DTO for account provisioning
///
/// The staff and superuser flags are tri-state: unset means "use the
/// default for the requested account kind", an explicit value is honored
/// for regular accounts and validated for superuser accounts.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CreateUserDto {
    pub email: String,
    pub password: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub gender: Option<Gender>,
    pub ethnic_group_id: Option<String>,
    pub photo_path: Option<String>,
    pub is_staff: Option<bool>,
    pub is_superuser: Option<bool>,
}

/// DTO for updating an existing account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserDto {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<Gender>,
    pub ethnic_group_id: Option<String>,
    pub photo_path: Option<String>,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
}
