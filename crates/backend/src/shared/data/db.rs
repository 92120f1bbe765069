use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

const CREATE_ETHNIC_GROUP_SQL: &str = r#"
    CREATE TABLE a001_ethnic_group (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        description TEXT NOT NULL,
        history TEXT NOT NULL DEFAULT '',
        is_deleted INTEGER NOT NULL DEFAULT 0,
        created_at TEXT,
        updated_at TEXT,
        version INTEGER NOT NULL DEFAULT 0
    );
"#;

const CREATE_LANGUAGE_SQL: &str = r#"
    CREATE TABLE a002_language (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        ethnic_group_id TEXT NOT NULL,
        is_deleted INTEGER NOT NULL DEFAULT 0,
        created_at TEXT,
        updated_at TEXT,
        version INTEGER NOT NULL DEFAULT 0
    );
"#;

const CREATE_PODCAST_SQL: &str = r#"
    CREATE TABLE a003_podcast (
        id TEXT PRIMARY KEY NOT NULL,
        title TEXT NOT NULL,
        description TEXT NOT NULL,
        photo_path TEXT,
        category TEXT NOT NULL,
        is_deleted INTEGER NOT NULL DEFAULT 0,
        created_at TEXT,
        updated_at TEXT,
        version INTEGER NOT NULL DEFAULT 0
    );
"#;

const CREATE_EVENT_SQL: &str = r#"
    CREATE TABLE a004_event (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        description TEXT NOT NULL,
        date TEXT NOT NULL,
        location TEXT NOT NULL,
        status TEXT NOT NULL DEFAULT '',
        entry_price TEXT NOT NULL DEFAULT '0.00',
        seats_available INTEGER NOT NULL DEFAULT 0,
        photo_path TEXT NOT NULL DEFAULT 'default.jpg',
        is_deleted INTEGER NOT NULL DEFAULT 0,
        created_at TEXT,
        updated_at TEXT,
        version INTEGER NOT NULL DEFAULT 0
    );
"#;

const CREATE_MARKETPLACE_ITEM_SQL: &str = r#"
    CREATE TABLE a005_marketplace_item (
        id TEXT PRIMARY KEY NOT NULL,
        title TEXT NOT NULL,
        author TEXT NOT NULL DEFAULT '',
        price TEXT NOT NULL DEFAULT '0.00',
        description TEXT NOT NULL DEFAULT '',
        photo_path TEXT NOT NULL DEFAULT 'photo_objetVente/default.jpg',
        is_deleted INTEGER NOT NULL DEFAULT 0,
        created_at TEXT,
        updated_at TEXT,
        version INTEGER NOT NULL DEFAULT 0
    );
"#;

const CREATE_THEME_SQL: &str = r#"
    CREATE TABLE a006_theme (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        is_deleted INTEGER NOT NULL DEFAULT 0,
        created_at TEXT,
        updated_at TEXT,
        version INTEGER NOT NULL DEFAULT 0
    );
"#;

const CREATE_COURSE_SQL: &str = r#"
    CREATE TABLE a007_course (
        id TEXT PRIMARY KEY NOT NULL,
        title TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        language_id TEXT NOT NULL,
        photo_path TEXT,
        author_id TEXT NOT NULL,
        availability TEXT NOT NULL DEFAULT 'en_cours',
        is_deleted INTEGER NOT NULL DEFAULT 0,
        created_at TEXT,
        updated_at TEXT,
        version INTEGER NOT NULL DEFAULT 0
    );
"#;

const CREATE_COURSE_THEME_SQL: &str = r#"
    CREATE TABLE a007_course_theme (
        course_id TEXT NOT NULL,
        theme_id TEXT NOT NULL,
        PRIMARY KEY (course_id, theme_id)
    );
"#;

const CREATE_LESSON_SQL: &str = r#"
    CREATE TABLE a008_lesson (
        id TEXT PRIMARY KEY NOT NULL,
        title TEXT NOT NULL,
        video_path TEXT,
        document_path TEXT,
        course_id TEXT NOT NULL,
        is_deleted INTEGER NOT NULL DEFAULT 0,
        created_at TEXT,
        updated_at TEXT,
        version INTEGER NOT NULL DEFAULT 0
    );
"#;

const CREATE_LEARNING_ITEM_SQL: &str = r#"
    CREATE TABLE a009_learning_item (
        id TEXT PRIMARY KEY NOT NULL,
        content TEXT NOT NULL,
        course_id TEXT NOT NULL,
        is_deleted INTEGER NOT NULL DEFAULT 0,
        created_at TEXT,
        updated_at TEXT,
        version INTEGER NOT NULL DEFAULT 0
    );
"#;

/// Open the SQLite database and bootstrap the schema
///
/// Foreign keys are intentionally not declared at the SQL level: delete
/// policies (cascade for user-authored courses, no-action everywhere
/// else) live in the services.
pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<()> {
    let db_file = db_path.unwrap_or("target/db/heritage.db");
    if let Some(parent) = std::path::Path::new(db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_file).is_absolute() {
        std::path::PathBuf::from(db_file)
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;

    ensure_table(&conn, "a001_ethnic_group", CREATE_ETHNIC_GROUP_SQL).await?;
    ensure_table(&conn, "a002_language", CREATE_LANGUAGE_SQL).await?;
    ensure_table(&conn, "a003_podcast", CREATE_PODCAST_SQL).await?;
    ensure_table(&conn, "a004_event", CREATE_EVENT_SQL).await?;
    ensure_table(&conn, "a005_marketplace_item", CREATE_MARKETPLACE_ITEM_SQL).await?;
    ensure_table(&conn, "a006_theme", CREATE_THEME_SQL).await?;
    ensure_table(&conn, "a007_course", CREATE_COURSE_SQL).await?;
    ensure_table(&conn, "a007_course_theme", CREATE_COURSE_THEME_SQL).await?;
    ensure_table(&conn, "a008_lesson", CREATE_LESSON_SQL).await?;
    ensure_table(&conn, "a009_learning_item", CREATE_LEARNING_ITEM_SQL).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

/// Create a table if it is missing (minimal schema bootstrap)
async fn ensure_table(
    conn: &DatabaseConnection,
    table: &str,
    create_sql: &str,
) -> anyhow::Result<()> {
    let check = format!(
        "SELECT name FROM sqlite_master WHERE type='table' AND name='{}';",
        table
    );
    let existing = conn
        .query_all(Statement::from_string(DatabaseBackend::Sqlite, check))
        .await?;

    if existing.is_empty() {
        tracing::info!("Creating {} table", table);
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_sql.to_string(),
        ))
        .await?;
    }

    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}
