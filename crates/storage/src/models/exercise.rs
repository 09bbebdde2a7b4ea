use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Entry in the shared exercise library.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Exercise {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub muscle_group: Option<String>,
    pub equipment: Option<String>,
    pub difficulty: String,
    pub description: Option<String>,
    pub instructions: Option<String>,
    pub calories_per_minute: Option<f64>,
    pub created_at: chrono::NaiveDateTime,
}

/// The default is used for exercises created implicitly from a workout log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ExerciseCategory {
    Cardio,
    #[default]
    Strength,
    Flexibility,
    Balance,
}

impl ExerciseCategory {
    pub const ALL: [ExerciseCategory; 4] = [
        ExerciseCategory::Cardio,
        ExerciseCategory::Strength,
        ExerciseCategory::Flexibility,
        ExerciseCategory::Balance,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExerciseCategory::Cardio => "Cardio",
            ExerciseCategory::Strength => "Strength",
            ExerciseCategory::Flexibility => "Flexibility",
            ExerciseCategory::Balance => "Balance",
        }
    }
}

impl fmt::Display for ExerciseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| format!("unknown exercise category '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_every_category_name() {
        for category in ExerciseCategory::ALL {
            assert_eq!(category.as_str().parse::<ExerciseCategory>(), Ok(category));
        }
    }

    #[test]
    fn test_rejects_unknown_and_lowercase_names() {
        assert!("Yoga".parse::<ExerciseCategory>().is_err());
        assert!("cardio".parse::<ExerciseCategory>().is_err());
    }
}
