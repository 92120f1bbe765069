use anyhow::Result;
use chrono::Utc;
use contracts::system::users::{CreateUserDto, UpdateUserDto, User};

use super::repository;
use crate::system::auth::password;

/// Canonicalize an e-mail address before storage
///
/// The local part keeps its case; the domain part after the last '@' is
/// lower-cased. Surrounding whitespace is stripped.
pub fn normalize_email(email: &str) -> String {
    let email = email.trim();
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => email.to_string(),
    }
}

/// Resolve the tri-state staff/superuser flags for privileged accounts
///
/// Unset flags default to true; an explicitly false flag is a validation
/// error, matching the account-provisioning contract.
pub fn resolve_superuser_flags(
    is_staff: Option<bool>,
    is_superuser: Option<bool>,
) -> Result<(bool, bool)> {
    let is_staff = is_staff.unwrap_or(true);
    let is_superuser = is_superuser.unwrap_or(true);

    if !is_staff {
        return Err(anyhow::anyhow!("Superuser must have is_staff=true"));
    }
    if !is_superuser {
        return Err(anyhow::anyhow!("Superuser must have is_superuser=true"));
    }

    Ok((is_staff, is_superuser))
}

/// Create a regular user account
pub async fn create_user(dto: CreateUserDto) -> Result<String> {
    if dto.email.trim().is_empty() {
        return Err(anyhow::anyhow!("The Email field must be set"));
    }

    let email = normalize_email(&dto.email);

    if repository::get_by_email(&email).await?.is_some() {
        return Err(anyhow::anyhow!("A user with this email already exists"));
    }

    // The password is hashed before it ever reaches the repository;
    // absent passwords produce an unusable credential without a strength check
    if let Some(ref plaintext) = dto.password {
        password::validate_password_strength(plaintext)?;
    }
    let plaintext = dto.password.unwrap_or_default();
    let password_hash = password::hash_password(&plaintext)?;

    let user_id = uuid::Uuid::new_v4().to_string();
    let now = Utc::now().to_rfc3339();

    let user = User {
        id: user_id.clone(),
        email,
        first_name: dto.first_name,
        last_name: dto.last_name,
        gender: dto.gender,
        ethnic_group_id: dto.ethnic_group_id,
        photo_path: dto.photo_path,
        is_active: true,
        is_staff: dto.is_staff.unwrap_or(false),
        is_superuser: dto.is_superuser.unwrap_or(false),
        created_at: now.clone(),
        updated_at: now,
    };

    repository::create_with_password(&user, &password_hash).await?;

    Ok(user_id)
}

/// Create a privileged account
///
/// Both flags default to true and must not be explicitly false.
pub async fn create_superuser(mut dto: CreateUserDto) -> Result<String> {
    let (is_staff, is_superuser) = resolve_superuser_flags(dto.is_staff, dto.is_superuser)?;
    dto.is_staff = Some(is_staff);
    dto.is_superuser = Some(is_superuser);

    create_user(dto).await
}

/// Check a login attempt against the stored credential
///
/// The e-mail address is normalized before lookup. Returns the account on
/// success, `None` for an unknown address, an inactive account or a wrong
/// password.
pub async fn verify_credentials(email: &str, plaintext: &str) -> Result<Option<User>> {
    let email = normalize_email(email);

    let Some(user) = repository::get_by_email(&email).await? else {
        return Ok(None);
    };
    if !user.is_active {
        return Ok(None);
    }

    let Some(hash) = repository::get_password_hash(&user.id).await? else {
        return Ok(None);
    };

    if password::verify_password(plaintext, &hash)? {
        Ok(Some(user))
    } else {
        Ok(None)
    }
}

/// Update profile fields of an existing account
pub async fn update(dto: UpdateUserDto) -> Result<()> {
    let mut user = repository::get_by_id(&dto.id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("User not found"))?;

    user.first_name = dto.first_name;
    user.last_name = dto.last_name;
    user.gender = dto.gender;
    user.ethnic_group_id = dto.ethnic_group_id;
    user.photo_path = dto.photo_path;
    user.is_active = dto.is_active;
    user.is_staff = dto.is_staff;
    user.is_superuser = dto.is_superuser;
    user.updated_at = Utc::now().to_rfc3339();

    repository::update(&user).await?;

    Ok(())
}

/// Delete an account and every course it authored (cascade)
pub async fn delete(id: &str) -> Result<bool> {
    let removed_courses = crate::domain::a007_course::repository::delete_by_author(id).await?;
    if removed_courses > 0 {
        tracing::info!(
            "Removed {} course(s) authored by user {}",
            removed_courses,
            id
        );
    }

    repository::delete(id).await
}

/// Get user by ID
pub async fn get_by_id(id: &str) -> Result<Option<User>> {
    repository::get_by_id(id).await
}

/// List accounts, optionally filtered by a search term over the admin
/// registry's search fields
pub async fn list_all(search: Option<&str>) -> Result<Vec<User>> {
    match search {
        Some(term) if !term.trim().is_empty() => {
            let fields = crate::shared::admin::registry::get("user")
                .map(|c| c.search_fields)
                .unwrap_or(&[]);
            repository::search(term.trim(), fields).await
        }
        _ => repository::list_all().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email_lowercases_domain() {
        assert_eq!(
            normalize_email("  Aminata@Example.COM "),
            "Aminata@example.com"
        );
    }

    #[test]
    fn test_normalize_email_keeps_local_part_case() {
        assert_eq!(normalize_email("JoSé@HERITAGE.cm"), "JoSé@heritage.cm");
    }

    #[test]
    fn test_normalize_email_without_at_sign() {
        assert_eq!(normalize_email(" brut "), "brut");
    }

    #[test]
    fn test_superuser_flags_default_to_true() {
        let (staff, superuser) = resolve_superuser_flags(None, None).unwrap();
        assert!(staff);
        assert!(superuser);
    }

    #[test]
    fn test_superuser_rejects_explicit_false_flags() {
        assert!(resolve_superuser_flags(Some(false), None).is_err());
        assert!(resolve_superuser_flags(None, Some(false)).is_err());
        assert!(resolve_superuser_flags(Some(true), Some(true)).is_ok());
    }
}
