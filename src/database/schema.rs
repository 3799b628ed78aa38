use sqlx::SqlitePool;
use tracing::info;

const SQL_CREATE_ACTIVITIES: &str = r#"
CREATE TABLE IF NOT EXISTS activities (
  name TEXT NOT NULL,
  description TEXT NOT NULL,
  schedule TEXT NOT NULL,
  max_participants INTEGER NOT NULL,
  participants TEXT NOT NULL DEFAULT '[]',
  created_at TEXT NOT NULL DEFAULT (datetime('now')),
  updated_at TEXT NOT NULL DEFAULT (datetime('now'))
)
"#;

const SQL_INDEX_ACTIVITIES_NAME: &str =
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_activities_name ON activities (name)";

const SQL_CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
  email TEXT NOT NULL,
  username TEXT NOT NULL,
  role TEXT NOT NULL DEFAULT 'student',
  hashed_password TEXT NOT NULL,
  created_at TEXT NOT NULL DEFAULT (datetime('now')),
  updated_at TEXT NOT NULL DEFAULT (datetime('now'))
)
"#;

const SQL_INDEX_USERS_EMAIL: &str =
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_users_email ON users (email)";

/// Creates both tables and their unique indexes if they are missing.
/// Runs at startup, before the server accepts requests.
pub async fn init(pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::query(SQL_CREATE_ACTIVITIES).execute(pool).await?;
    sqlx::query(SQL_INDEX_ACTIVITIES_NAME).execute(pool).await?;
    sqlx::query(SQL_CREATE_USERS).execute(pool).await?;
    sqlx::query(SQL_INDEX_USERS_EMAIL).execute(pool).await?;
    info!("database initialization complete");
    Ok(())
}
