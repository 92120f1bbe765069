use anyhow::{Context, Result};
use contracts::enums::gender::Gender;
use contracts::system::users::User;
use sea_orm::{ConnectionTrait, DatabaseBackend, QueryResult, Statement};

const USER_COLUMNS: &str = "id, email, first_name, last_name, gender, ethnic_group_id, photo_path, is_active, is_staff, is_superuser, created_at, updated_at";

fn map_row(row: &QueryResult) -> Result<User> {
    let gender: Option<String> = row.try_get("", "gender")?;
    Ok(User {
        id: row.try_get("", "id")?,
        email: row.try_get("", "email")?,
        first_name: row.try_get("", "first_name")?,
        last_name: row.try_get("", "last_name")?,
        gender: gender.as_deref().and_then(Gender::from_code),
        ethnic_group_id: row.try_get("", "ethnic_group_id")?,
        photo_path: row.try_get("", "photo_path")?,
        is_active: row.try_get::<i32>("", "is_active")? != 0,
        is_staff: row.try_get::<i32>("", "is_staff")? != 0,
        is_superuser: row.try_get::<i32>("", "is_superuser")? != 0,
        created_at: row.try_get("", "created_at")?,
        updated_at: row.try_get("", "updated_at")?,
    })
}

/// Create a user with an already-hashed password
pub async fn create_with_password(user: &User, password_hash: &str) -> Result<()> {
    use crate::shared::data::db::get_connection;

    let conn = get_connection();

    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT INTO sys_users (id, email, password_hash, first_name, last_name, gender, ethnic_group_id, photo_path, is_active, is_staff, is_superuser, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        [
            user.id.clone().into(),
            user.email.clone().into(),
            password_hash.to_string().into(),
            user.first_name.clone().into(),
            user.last_name.clone().into(),
            user.gender.map(|g| g.code().to_string()).into(),
            user.ethnic_group_id.clone().into(),
            user.photo_path.clone().into(),
            (if user.is_active { 1 } else { 0 }).into(),
            (if user.is_staff { 1 } else { 0 }).into(),
            (if user.is_superuser { 1 } else { 0 }).into(),
            user.created_at.clone().into(),
            user.updated_at.clone().into(),
        ],
    ))
    .await
    .context("Failed to insert user")?;

    Ok(())
}

/// Get user by ID
pub async fn get_by_id(id: &str) -> Result<Option<User>> {
    use crate::shared::data::db::get_connection;

    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            format!("SELECT {} FROM sys_users WHERE id = ?", USER_COLUMNS),
            [id.into()],
        ))
        .await?;

    match result {
        Some(row) => Ok(Some(map_row(&row)?)),
        None => Ok(None),
    }
}

/// Get user by normalized e-mail address
pub async fn get_by_email(email: &str) -> Result<Option<User>> {
    use crate::shared::data::db::get_connection;

    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            format!("SELECT {} FROM sys_users WHERE email = ?", USER_COLUMNS),
            [email.into()],
        ))
        .await?;

    match result {
        Some(row) => Ok(Some(map_row(&row)?)),
        None => Ok(None),
    }
}

/// Get password hash for user
pub async fn get_password_hash(user_id: &str) -> Result<Option<String>> {
    use crate::shared::data::db::get_connection;

    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT password_hash FROM sys_users WHERE id = ?",
            [user_id.into()],
        ))
        .await?;

    match result {
        Some(row) => {
            let hash: String = row.try_get("", "password_hash")?;
            Ok(Some(hash))
        }
        None => Ok(None),
    }
}

/// List all users
pub async fn list_all() -> Result<Vec<User>> {
    use crate::shared::data::db::get_connection;

    let conn = get_connection();

    let rows = conn
        .query_all(Statement::from_string(
            DatabaseBackend::Sqlite,
            format!(
                "SELECT {} FROM sys_users ORDER BY created_at DESC",
                USER_COLUMNS
            ),
        ))
        .await?;

    rows.iter().map(map_row).collect()
}

/// List users matching a search term over the given columns
///
/// Column names come from the admin registry, never from request input.
pub async fn search(term: &str, fields: &[&str]) -> Result<Vec<User>> {
    use crate::shared::data::db::get_connection;

    if fields.is_empty() {
        return list_all().await;
    }

    let conn = get_connection();

    let clauses: Vec<String> = fields.iter().map(|f| format!("{} LIKE ?", f)).collect();
    let pattern = format!("%{}%", term);
    let values: Vec<sea_orm::Value> = fields.iter().map(|_| pattern.clone().into()).collect();

    let rows = conn
        .query_all(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            format!(
                "SELECT {} FROM sys_users WHERE {} ORDER BY created_at DESC",
                USER_COLUMNS,
                clauses.join(" OR ")
            ),
            values,
        ))
        .await?;

    rows.iter().map(map_row).collect()
}

/// Update user profile fields
pub async fn update(user: &User) -> Result<()> {
    use crate::shared::data::db::get_connection;

    let conn = get_connection();

    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "UPDATE sys_users
         SET first_name = ?, last_name = ?, gender = ?, ethnic_group_id = ?, photo_path = ?, is_active = ?, is_staff = ?, is_superuser = ?, updated_at = ?
         WHERE id = ?",
        [
            user.first_name.clone().into(),
            user.last_name.clone().into(),
            user.gender.map(|g| g.code().to_string()).into(),
            user.ethnic_group_id.clone().into(),
            user.photo_path.clone().into(),
            (if user.is_active { 1 } else { 0 }).into(),
            (if user.is_staff { 1 } else { 0 }).into(),
            (if user.is_superuser { 1 } else { 0 }).into(),
            user.updated_at.clone().into(),
            user.id.clone().into(),
        ],
    ))
    .await
    .context("Failed to update user")?;

    Ok(())
}

/// Delete user (hard delete)
pub async fn delete(id: &str) -> Result<bool> {
    use crate::shared::data::db::get_connection;

    let conn = get_connection();

    let result = conn
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "DELETE FROM sys_users WHERE id = ?",
            [id.into()],
        ))
        .await
        .context("Failed to delete user")?;

    Ok(result.rows_affected() > 0)
}

/// Count total users
pub async fn count_users() -> Result<usize> {
    use crate::shared::data::db::get_connection;

    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT COUNT(*) as count FROM sys_users".to_string(),
        ))
        .await?;

    match result {
        Some(row) => {
            let count: i64 = row.try_get("", "count")?;
            Ok(count as usize)
        }
        None => Ok(0),
    }
}
