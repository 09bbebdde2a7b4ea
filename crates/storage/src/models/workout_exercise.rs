use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One exercise performed inside a workout, with its performance metrics.
///
/// `user_id` duplicates the owning workout's user so ownership can be checked
/// without a join.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WorkoutExercise {
    pub id: i64,
    pub user_id: i64,
    pub workout_id: i64,
    pub exercise_id: i64,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    /// Kilograms
    pub weight: Option<f64>,
    /// Seconds
    pub duration: Option<i32>,
    /// Kilometres
    pub distance: Option<f64>,
    pub calories_burned: Option<f64>,
    pub order_index: Option<i32>,
    pub notes: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}
