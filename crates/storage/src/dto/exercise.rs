use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::{Exercise, ExerciseCategory};

/// Request payload for adding an exercise to the shared library
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateExerciseRequest {
    #[validate(length(
        min = 2,
        max = 100,
        message = "Name must be between 2 and 100 characters"
    ))]
    pub name: String,

    #[validate(custom(function = "validate_category"))]
    pub category: String,

    #[validate(length(max = 50))]
    pub muscle_group: Option<String>,

    #[validate(length(max = 50))]
    pub equipment: Option<String>,

    #[validate(length(max = 20))]
    pub difficulty: Option<String>,

    pub description: Option<String>,

    pub instructions: Option<String>,

    #[validate(range(min = 0.0))]
    pub calories_per_minute: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateExerciseRequest {
    #[validate(length(
        min = 2,
        max = 100,
        message = "Name must be between 2 and 100 characters"
    ))]
    pub name: Option<String>,

    #[validate(custom(function = "validate_category"))]
    pub category: Option<String>,

    #[validate(length(max = 50))]
    pub muscle_group: Option<String>,

    #[validate(length(max = 50))]
    pub equipment: Option<String>,

    #[validate(length(max = 20))]
    pub difficulty: Option<String>,

    pub description: Option<String>,

    pub instructions: Option<String>,

    #[validate(range(min = 0.0))]
    pub calories_per_minute: Option<f64>,
}

/// Query string filters for listing exercises
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ExerciseFilter {
    /// Only return exercises in this category
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExerciseResponse {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub muscle_group: Option<String>,
    pub equipment: Option<String>,
    pub difficulty: String,
    pub description: Option<String>,
    pub instructions: Option<String>,
    pub calories_per_minute: Option<f64>,
    pub created_at: NaiveDateTime,
}

pub(crate) fn validate_category(category: &str) -> Result<(), validator::ValidationError> {
    match category.parse::<ExerciseCategory>() {
        Ok(_) => Ok(()),
        Err(_) => {
            let mut error = validator::ValidationError::new("invalid_category");
            error.message =
                Some("Category must be one of Cardio, Strength, Flexibility, Balance".into());
            Err(error)
        }
    }
}

impl From<Exercise> for ExerciseResponse {
    fn from(exercise: Exercise) -> Self {
        Self {
            id: exercise.id,
            name: exercise.name,
            category: exercise.category,
            muscle_group: exercise.muscle_group,
            equipment: exercise.equipment,
            difficulty: exercise.difficulty,
            description: exercise.description,
            instructions: exercise.instructions,
            calories_per_minute: exercise.calories_per_minute,
            created_at: exercise.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_must_be_known() {
        let req: CreateExerciseRequest = serde_json::from_value(serde_json::json!({
            "name": "Plank",
            "category": "Core",
        }))
        .unwrap();

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("category"));
    }

    #[test]
    fn test_name_needs_two_characters() {
        let req: CreateExerciseRequest = serde_json::from_value(serde_json::json!({
            "name": "X",
            "category": "Balance",
        }))
        .unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_validates_only_present_fields() {
        assert!(UpdateExerciseRequest::default().validate().is_ok());

        let req = UpdateExerciseRequest {
            category: Some("Flexibility".to_string()),
            ..Default::default()
        };
        assert!(req.validate().is_ok());
    }
}
