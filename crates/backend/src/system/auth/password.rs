use anyhow::Result;
use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Hash a password with Argon2id; the plaintext is never persisted
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;
    Ok(hash.to_string())
}

/// Check a plaintext password against a stored hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| anyhow::anyhow!("Invalid password hash: {}", e))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Minimal strength requirements for new passwords
pub fn validate_password_strength(password: &str) -> Result<()> {
    if password.len() < 4 {
        return Err(anyhow::anyhow!(
            "Password must be at least 4 characters long"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_not_plaintext() {
        let hash = hash_password("s3cret-motdepasse").unwrap();
        assert_ne!(hash, "s3cret-motdepasse");
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn test_verify_roundtrip() {
        let hash = hash_password("bonjour").unwrap();
        assert!(verify_password("bonjour", &hash).unwrap());
        assert!(!verify_password("bonsoir", &hash).unwrap());
    }

    #[test]
    fn test_strength_rejects_short_password() {
        assert!(validate_password_strength("ab").is_err());
        assert!(validate_password_strength("abcd").is_ok());
    }
}
