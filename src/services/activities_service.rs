use serde::Serialize;
use sqlx::SqlitePool;
use std::collections::BTreeMap;

use crate::database::activities_repo;
use crate::error::ApiError;

#[derive(Debug, Serialize)]
pub struct ActivityView {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    pub participants: Vec<String>,
}

/// Every activity in the store, keyed by name.
pub async fn list_activities(
    pool: &SqlitePool,
) -> Result<BTreeMap<String, ActivityView>, ApiError> {
    let rows = activities_repo::list_all(pool).await?;

    let mut activities = BTreeMap::new();
    for row in rows {
        let participants = row.participant_list()?;
        activities.insert(
            row.name,
            ActivityView {
                description: row.description,
                schedule: row.schedule,
                max_participants: row.max_participants,
                participants,
            },
        );
    }
    Ok(activities)
}

/// Adds the email to the activity's roster. The repository update carries
/// the capacity and uniqueness guards; a zero row count means one of them
/// failed, and a single read-back picks the matching refusal.
pub async fn signup(pool: &SqlitePool, activity_name: &str, email: &str) -> Result<(), ApiError> {
    if activities_repo::push_participant(pool, activity_name, email).await? == 1 {
        return Ok(());
    }

    let Some(activity) = activities_repo::find_by_name(pool, activity_name).await? else {
        return Err(ApiError::ActivityNotFound);
    };
    if activity.participant_list()?.iter().any(|p| p == email) {
        return Err(ApiError::AlreadySignedUp);
    }
    Err(ApiError::AtCapacity)
}

/// Removes the email from the activity's roster, guarded on membership.
pub async fn unregister(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
) -> Result<(), ApiError> {
    if activities_repo::pull_participant(pool, activity_name, email).await? == 1 {
        return Ok(());
    }

    if activities_repo::find_by_name(pool, activity_name)
        .await?
        .is_none()
    {
        return Err(ApiError::ActivityNotFound);
    }
    Err(ApiError::NotSignedUp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::activities_repo::NewActivity;
    use crate::database::schema;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        schema::init(&pool).await.unwrap();
        pool
    }

    async fn seed(pool: &SqlitePool, name: &str, max: i64, participants: &[&str]) {
        activities_repo::insert_activity(
            pool,
            &NewActivity {
                name,
                description: "desc",
                schedule: "Fridays, 3:30 PM - 5:00 PM",
                max_participants: max,
                participants,
            },
        )
        .await
        .unwrap();
    }

    async fn roster(pool: &SqlitePool, name: &str) -> Vec<String> {
        activities_repo::find_by_name(pool, name)
            .await
            .unwrap()
            .unwrap()
            .participant_list()
            .unwrap()
    }

    /// Chess Club at 2 of 12: a fresh signup lands at the roster tail, a
    /// repeat of the same email is refused and the count stays at 3.
    #[tokio::test]
    async fn signup_appends_once_then_refuses_repeat() {
        let pool = test_pool().await;
        seed(
            &pool,
            "Chess Club",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        )
        .await;

        signup(&pool, "Chess Club", "emma@mergington.edu")
            .await
            .unwrap();
        assert_eq!(
            roster(&pool, "Chess Club").await,
            vec![
                "michael@mergington.edu",
                "daniel@mergington.edu",
                "emma@mergington.edu"
            ]
        );

        let err = signup(&pool, "Chess Club", "emma@mergington.edu")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::AlreadySignedUp));
        assert_eq!(roster(&pool, "Chess Club").await.len(), 3);
    }

    #[tokio::test]
    async fn signup_refuses_when_full() {
        let pool = test_pool().await;
        seed(&pool, "Math Club", 1, &["james@mergington.edu"]).await;

        let err = signup(&pool, "Math Club", "ella@mergington.edu")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::AtCapacity));
        assert_eq!(roster(&pool, "Math Club").await, vec!["james@mergington.edu"]);
    }

    #[tokio::test]
    async fn signup_unknown_activity_is_not_found() {
        let pool = test_pool().await;

        let err = signup(&pool, "Quantum Club", "emma@mergington.edu")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::ActivityNotFound));
    }

    #[tokio::test]
    async fn unregister_removes_exactly_the_entry() {
        let pool = test_pool().await;
        seed(
            &pool,
            "Drama Club",
            20,
            &["ella@mergington.edu", "scarlett@mergington.edu"],
        )
        .await;

        unregister(&pool, "Drama Club", "ella@mergington.edu")
            .await
            .unwrap();
        assert_eq!(
            roster(&pool, "Drama Club").await,
            vec!["scarlett@mergington.edu"]
        );
    }

    #[tokio::test]
    async fn unregister_absent_email_is_refused() {
        let pool = test_pool().await;
        seed(&pool, "Drama Club", 20, &["ella@mergington.edu"]).await;

        let err = unregister(&pool, "Drama Club", "harper@mergington.edu")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotSignedUp));
        assert_eq!(roster(&pool, "Drama Club").await, vec!["ella@mergington.edu"]);
    }

    #[tokio::test]
    async fn unregister_unknown_activity_is_not_found() {
        let pool = test_pool().await;

        let err = unregister(&pool, "Quantum Club", "emma@mergington.edu")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::ActivityNotFound));
    }

    /// Signup followed by unregister restores the roster, order preserved.
    #[tokio::test]
    async fn signup_then_unregister_round_trips() {
        let pool = test_pool().await;
        seed(
            &pool,
            "Soccer Team",
            22,
            &["liam@mergington.edu", "noah@mergington.edu"],
        )
        .await;
        let before = roster(&pool, "Soccer Team").await;

        signup(&pool, "Soccer Team", "mia@mergington.edu")
            .await
            .unwrap();
        unregister(&pool, "Soccer Team", "mia@mergington.edu")
            .await
            .unwrap();

        assert_eq!(roster(&pool, "Soccer Team").await, before);
    }

    #[tokio::test]
    async fn listing_maps_every_activity_by_name() {
        let pool = test_pool().await;
        seed(&pool, "Chess Club", 12, &["michael@mergington.edu"]).await;
        seed(&pool, "Art Club", 15, &[]).await;

        let activities = list_activities(&pool).await.unwrap();
        assert_eq!(activities.len(), 2);

        let chess = &activities["Chess Club"];
        assert_eq!(chess.description, "desc");
        assert_eq!(chess.schedule, "Fridays, 3:30 PM - 5:00 PM");
        assert_eq!(chess.max_participants, 12);
        assert_eq!(chess.participants, vec!["michael@mergington.edu"]);
        assert!(activities["Art Club"].participants.is_empty());
    }

    #[tokio::test]
    async fn listing_never_exceeds_capacity() {
        let pool = test_pool().await;
        seed(&pool, "Math Club", 2, &["a@mergington.edu"]).await;
        let _ = signup(&pool, "Math Club", "b@mergington.edu").await;
        let _ = signup(&pool, "Math Club", "c@mergington.edu").await;

        for view in list_activities(&pool).await.unwrap().values() {
            assert!(view.participants.len() as i64 <= view.max_participants);
        }
    }
}
