use sqlx::SqlitePool;

use crate::models::ActivitiesRow;

const SQL_LIST_ALL: &str = r#"
SELECT
  name,
  description,
  schedule,
  max_participants,
  participants,
  created_at,
  updated_at
FROM activities
ORDER BY rowid
"#;

pub async fn list_all(pool: &SqlitePool) -> sqlx::Result<Vec<ActivitiesRow>> {
    sqlx::query_as::<_, ActivitiesRow>(SQL_LIST_ALL)
        .fetch_all(pool)
        .await
}

const SQL_FIND_BY_NAME: &str = r#"
SELECT
  name,
  description,
  schedule,
  max_participants,
  participants,
  created_at,
  updated_at
FROM activities
WHERE name = ?1
LIMIT 1
"#;

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> sqlx::Result<Option<ActivitiesRow>> {
    sqlx::query_as::<_, ActivitiesRow>(SQL_FIND_BY_NAME)
        .bind(name)
        .fetch_optional(pool)
        .await
}

// Appends the email to the roster in one statement. The WHERE clause carries
// the capacity and uniqueness preconditions, so concurrent signups for the
// last free slot cannot both match.
const SQL_PUSH_PARTICIPANT: &str = r#"
UPDATE activities
SET
  participants = json_insert(participants, '$[#]', ?2),
  updated_at = datetime('now')
WHERE name = ?1
  AND json_array_length(participants) < max_participants
  AND NOT EXISTS (
    SELECT 1 FROM json_each(activities.participants) WHERE json_each.value = ?2
  )
"#;

pub async fn push_participant(pool: &SqlitePool, name: &str, email: &str) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_PUSH_PARTICIPANT)
        .bind(name)
        .bind(email)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

// Rebuilds the roster without the email, keeping the order of the rest.
// Guarded on membership so a zero row count means "was not signed up".
const SQL_PULL_PARTICIPANT: &str = r#"
UPDATE activities
SET
  participants = (
    SELECT COALESCE(json_group_array(value), '[]')
    FROM json_each(activities.participants)
    WHERE value <> ?2
  ),
  updated_at = datetime('now')
WHERE name = ?1
  AND EXISTS (
    SELECT 1 FROM json_each(activities.participants) WHERE json_each.value = ?2
  )
"#;

pub async fn pull_participant(pool: &SqlitePool, name: &str, email: &str) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_PULL_PARTICIPANT)
        .bind(name)
        .bind(email)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

const SQL_INSERT_ACTIVITY: &str = r#"
INSERT INTO activities (
  name,
  description,
  schedule,
  max_participants,
  participants,
  created_at,
  updated_at
) VALUES (?1, ?2, ?3, ?4, ?5, datetime('now'), datetime('now'))
"#;

pub struct NewActivity<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub schedule: &'a str,
    pub max_participants: i64,
    pub participants: &'a [&'a str],
}

pub async fn insert_activity(pool: &SqlitePool, activity: &NewActivity<'_>) -> sqlx::Result<u64> {
    let roster = serde_json::json!(activity.participants).to_string();
    let res = sqlx::query(SQL_INSERT_ACTIVITY)
        .bind(activity.name)
        .bind(activity.description)
        .bind(activity.schedule)
        .bind(activity.max_participants)
        .bind(roster)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

const SQL_DELETE_ALL: &str = "DELETE FROM activities";

pub async fn delete_all(pool: &SqlitePool) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_ALL).execute(pool).await?;
    Ok(res.rows_affected())
}
