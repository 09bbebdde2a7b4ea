use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::WorkoutExercise;

/// Links an existing library exercise to one of the caller's workouts
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateWorkoutExerciseRequest {
    pub workout_id: i64,

    pub exercise_id: i64,

    #[validate(range(min = 0, message = "Sets cannot be negative"))]
    pub sets: Option<i32>,

    #[validate(range(min = 0, message = "Reps cannot be negative"))]
    pub reps: Option<i32>,

    #[validate(range(min = 0.0))]
    pub weight: Option<f64>,

    #[validate(range(min = 0))]
    pub duration: Option<i32>,

    #[validate(range(min = 0.0))]
    pub distance: Option<f64>,

    #[validate(range(min = 0.0))]
    pub calories_burned: Option<f64>,

    #[validate(range(min = 0))]
    pub order: Option<i32>,

    pub notes: Option<String>,
}

/// Performance metrics only; the workout and exercise of a link are fixed.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateWorkoutExerciseRequest {
    #[validate(range(min = 0, message = "Sets cannot be negative"))]
    pub sets: Option<i32>,

    #[validate(range(min = 0, message = "Reps cannot be negative"))]
    pub reps: Option<i32>,

    #[validate(range(min = 0.0))]
    pub weight: Option<f64>,

    #[validate(range(min = 0))]
    pub duration: Option<i32>,

    #[validate(range(min = 0.0))]
    pub distance: Option<f64>,

    #[validate(range(min = 0.0))]
    pub calories_burned: Option<f64>,

    #[validate(range(min = 0))]
    pub order: Option<i32>,

    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct WorkoutExerciseFilter {
    /// Only return entries of this workout
    pub workout_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkoutExerciseResponse {
    pub id: i64,
    pub workout_id: i64,
    pub exercise_id: i64,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight: Option<f64>,
    pub duration: Option<i32>,
    pub distance: Option<f64>,
    pub calories_burned: Option<f64>,
    pub order: Option<i32>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<WorkoutExercise> for WorkoutExerciseResponse {
    fn from(entry: WorkoutExercise) -> Self {
        Self {
            id: entry.id,
            workout_id: entry.workout_id,
            exercise_id: entry.exercise_id,
            sets: entry.sets,
            reps: entry.reps,
            weight: entry.weight,
            duration: entry.duration,
            distance: entry.distance,
            calories_burned: entry.calories_burned,
            order: entry.order_index,
            notes: entry.notes,
            created_at: entry.created_at,
        }
    }
}
