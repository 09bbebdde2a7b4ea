use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::dto::{list_errors, validate_nested};
use crate::models::Workout;

/// Exercise given inline when logging a workout, resolved by exact name.
///
/// Unknown names are added to the exercise library on the fly.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct InlineExerciseRequest {
    #[validate(length(
        min = 2,
        max = 100,
        message = "Exercise name must be between 2 and 100 characters"
    ))]
    pub name: String,

    #[validate(range(min = 0, message = "Sets cannot be negative"))]
    pub sets: Option<i32>,

    #[validate(range(min = 0, message = "Reps cannot be negative"))]
    pub reps: Option<i32>,

    #[validate(range(min = 0.0))]
    pub weight: Option<f64>,

    /// Seconds
    #[validate(range(min = 0))]
    pub duration: Option<i32>,

    #[validate(range(min = 0.0))]
    pub distance: Option<f64>,

    pub notes: Option<String>,

    /// Position in the workout; defaults to the entry's index in the list
    #[validate(range(min = 0))]
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateWorkoutRequest {
    #[validate(length(
        min = 2,
        max = 100,
        message = "Name must be between 2 and 100 characters"
    ))]
    pub name: String,

    pub description: Option<String>,

    /// Defaults to today
    pub date: Option<NaiveDate>,

    /// Minutes
    #[validate(range(min = 1, message = "Duration must be at least 1 minute"))]
    pub duration: Option<i32>,

    #[validate(range(min = 0.0))]
    pub calories: Option<f64>,

    #[validate(length(max = 50))]
    pub workout_type: Option<String>,

    #[serde(default)]
    pub exercises: Vec<InlineExerciseRequest>,
}

/// Partial workout update. When `exercises` is present it replaces the
/// workout's current exercise list.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateWorkoutRequest {
    #[validate(length(
        min = 2,
        max = 100,
        message = "Name must be between 2 and 100 characters"
    ))]
    pub name: Option<String>,

    pub description: Option<String>,

    pub date: Option<NaiveDate>,

    #[validate(range(min = 1, message = "Duration must be at least 1 minute"))]
    pub duration: Option<i32>,

    #[validate(range(min = 0.0))]
    pub calories: Option<f64>,

    #[validate(length(max = 50))]
    pub workout_type: Option<String>,

    pub exercises: Option<Vec<InlineExerciseRequest>>,
}

/// Exercise entry embedded in a workout response
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WorkoutExerciseDetail {
    /// Id of the workout/exercise link
    pub id: i64,
    #[serde(skip)]
    pub workout_id: i64,
    pub exercise_id: i64,
    pub name: String,
    pub category: String,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight: Option<f64>,
    pub duration: Option<i32>,
    pub distance: Option<f64>,
    pub calories_burned: Option<f64>,
    pub notes: Option<String>,
    #[sqlx(rename = "order_index")]
    pub order: Option<i32>,
}

/// Workout with its exercises nested
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkoutResponse {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub duration: Option<i32>,
    pub calories: Option<f64>,
    pub workout_type: Option<String>,
    pub created_at: NaiveDateTime,
    pub exercises: Vec<WorkoutExerciseDetail>,
}

impl WorkoutResponse {
    pub fn new(workout: Workout, exercises: Vec<WorkoutExerciseDetail>) -> Self {
        Self {
            id: workout.id,
            user_id: workout.user_id,
            name: workout.name,
            description: workout.description,
            date: workout.date,
            duration: workout.duration,
            calories: workout.calories,
            workout_type: workout.workout_type,
            created_at: workout.created_at,
            exercises,
        }
    }
}

impl CreateWorkoutRequest {
    /// Validates the workout and every inline exercise.
    pub fn validate_all(&self) -> Result<(), validator::ValidationErrors> {
        validate_nested(self, "exercises", list_errors(&self.exercises))
    }
}

impl UpdateWorkoutRequest {
    pub fn validate_all(&self) -> Result<(), validator::ValidationErrors> {
        validate_nested(self, "exercises", list_errors(self.exercises.iter().flatten()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exercises_default_to_empty() {
        let req: CreateWorkoutRequest =
            serde_json::from_value(serde_json::json!({ "name": "Leg day" })).unwrap();
        assert!(req.exercises.is_empty());
        assert!(req.date.is_none());
        assert!(req.validate_all().is_ok());
    }

    #[test]
    fn test_inline_exercise_rejects_negative_reps() {
        let req: CreateWorkoutRequest = serde_json::from_value(serde_json::json!({
            "name": "Leg day",
            "exercises": [
                { "name": "Squat", "sets": 5, "reps": 5 },
                { "name": "Lunge", "sets": 3, "reps": -1 },
            ],
        }))
        .unwrap();

        let errors = req.validate_all().unwrap_err();
        match errors.errors().get("exercises") {
            Some(validator::ValidationErrorsKind::List(items)) => {
                assert_eq!(items.keys().copied().collect::<Vec<_>>(), [1]);
                assert!(items[&1].field_errors().contains_key("reps"));
            }
            other => panic!("expected list errors, got {other:?}"),
        }
    }

    #[test]
    fn test_duration_must_be_positive() {
        let req: CreateWorkoutRequest =
            serde_json::from_value(serde_json::json!({ "name": "Run", "duration": 0 })).unwrap();
        assert!(req.validate_all().is_err());
    }

    #[test]
    fn test_update_rejects_owner_change() {
        let result = serde_json::from_value::<UpdateWorkoutRequest>(serde_json::json!({
            "user_id": 2,
        }));
        assert!(result.is_err());
    }
}
