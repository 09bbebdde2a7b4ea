use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Workout {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub date: chrono::NaiveDate,
    /// Minutes
    pub duration: Option<i32>,
    pub calories: Option<f64>,
    pub workout_type: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}
