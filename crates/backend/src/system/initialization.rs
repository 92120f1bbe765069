use anyhow::{Context, Result};
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

/// Account table; the e-mail address is the unique login identifier
const CREATE_SYS_USERS_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS sys_users (
        id TEXT PRIMARY KEY NOT NULL,
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        first_name TEXT NOT NULL DEFAULT '',
        last_name TEXT NOT NULL DEFAULT '',
        gender TEXT,
        ethnic_group_id TEXT,
        photo_path TEXT,
        is_active INTEGER NOT NULL DEFAULT 1,
        is_staff INTEGER NOT NULL DEFAULT 0,
        is_superuser INTEGER NOT NULL DEFAULT 0,
        created_at TEXT,
        updated_at TEXT
    );
"#;

/// Apply the account system migration
pub async fn apply_system_migration() -> Result<()> {
    use crate::shared::data::db::get_connection;

    let conn = get_connection();

    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        CREATE_SYS_USERS_SQL.to_string(),
    ))
    .await
    .context("Failed to create sys_users table")?;

    tracing::info!("Account system migration applied");

    Ok(())
}

/// Ensure a superuser exists (create one if the table is empty)
pub async fn ensure_superuser_exists() -> Result<()> {
    use crate::system::users::{repository, service};
    use contracts::system::users::CreateUserDto;

    let count = repository::count_users().await?;

    if count == 0 {
        tracing::info!("No users found. Creating default superuser...");

        let admin_dto = CreateUserDto {
            email: "admin@example.com".to_string(),
            password: Some("admin".to_string()),
            first_name: "Admin".to_string(),
            ..Default::default()
        };

        let admin_id = service::create_superuser(admin_dto).await?;

        tracing::warn!("═══════════════════════════════════════════════");
        tracing::warn!("  Default superuser created!");
        tracing::warn!("  Email:    admin@example.com");
        tracing::warn!("  Password: admin");
        tracing::warn!("  User ID:  {}", admin_id);
        tracing::warn!("  PLEASE CHANGE THE PASSWORD IMMEDIATELY!");
        tracing::warn!("═══════════════════════════════════════════════");
    }

    Ok(())
}
