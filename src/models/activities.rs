#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ActivitiesRow {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    // JSON array of participant emails, in signup order.
    pub participants: String,
    pub created_at: String,
    pub updated_at: String,
}

impl ActivitiesRow {
    pub fn participant_list(&self) -> Result<Vec<String>, serde_json::Error> {
        serde_json::from_str(&self.participants)
    }
}
