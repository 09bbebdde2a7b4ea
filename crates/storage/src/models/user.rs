use sqlx::FromRow;

use crate::password;

/// A registered account and its fitness profile.
///
/// Not `Serialize`: the password hash must never reach a response body. Use
/// `dto::user::UserResponse` for output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub age: Option<i32>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub fitness_goal: Option<String>,
    pub target_weight: Option<f64>,
    pub experience_level: String,
    pub daily_calorie_goal: Option<i32>,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

impl User {
    /// Whether `candidate` matches the stored password hash.
    pub fn check_password(&self, candidate: &str) -> bool {
        password::check_password(&self.password_hash, candidate)
    }
}
