// Account rows for the (future) login flow; no activity route reads them.
#[allow(dead_code)]
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UsersRow {
    pub email: String,
    pub username: String,
    pub role: String, // student, teacher, admin
    pub hashed_password: String,
    pub created_at: String,
    pub updated_at: String,
}
