use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::dto::{struct_errors, validate_nested};
use crate::models::ProgressLog;

/// Body circumferences in centimetres, as exchanged with clients.
///
/// `arms` is stored in the `biceps` column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct Measurements {
    #[validate(range(min = 0.0))]
    pub chest: Option<f64>,

    #[validate(range(min = 0.0))]
    pub waist: Option<f64>,

    #[validate(range(min = 0.0))]
    pub hips: Option<f64>,

    #[serde(alias = "biceps")]
    #[validate(range(min = 0.0))]
    pub arms: Option<f64>,

    #[validate(range(min = 0.0))]
    pub thighs: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateProgressLogRequest {
    #[validate(custom(function = "validate_not_in_future"))]
    pub log_date: NaiveDate,

    #[validate(range(min = 0.0))]
    pub weight: Option<f64>,

    #[serde(rename = "bodyFat", alias = "body_fat", alias = "body_fat_percentage")]
    #[validate(range(min = 0.0, max = 100.0, message = "Body fat must be between 0 and 100"))]
    pub body_fat: Option<f64>,

    pub measurements: Option<Measurements>,

    /// Top-level measurement fields, merged under `measurements`.
    #[validate(range(min = 0.0))]
    pub chest: Option<f64>,

    #[validate(range(min = 0.0))]
    pub waist: Option<f64>,

    #[validate(range(min = 0.0))]
    pub hips: Option<f64>,

    #[serde(alias = "arms")]
    #[validate(range(min = 0.0))]
    pub biceps: Option<f64>,

    #[validate(range(min = 0.0))]
    pub thighs: Option<f64>,

    #[validate(length(max = 20))]
    pub mood: Option<String>,

    #[validate(range(min = 1, max = 10, message = "Energy level must be between 1 and 10"))]
    pub energy_level: Option<i32>,

    pub notes: Option<String>,
}

/// Partial update; measurements are merged field by field.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateProgressLogRequest {
    #[validate(custom(function = "validate_not_in_future"))]
    pub log_date: Option<NaiveDate>,

    #[validate(range(min = 0.0))]
    pub weight: Option<f64>,

    #[serde(rename = "bodyFat", alias = "body_fat", alias = "body_fat_percentage")]
    #[validate(range(min = 0.0, max = 100.0, message = "Body fat must be between 0 and 100"))]
    pub body_fat: Option<f64>,

    pub measurements: Option<Measurements>,

    /// Top-level measurement fields, merged under `measurements`.
    #[validate(range(min = 0.0))]
    pub chest: Option<f64>,

    #[validate(range(min = 0.0))]
    pub waist: Option<f64>,

    #[validate(range(min = 0.0))]
    pub hips: Option<f64>,

    #[serde(alias = "arms")]
    #[validate(range(min = 0.0))]
    pub biceps: Option<f64>,

    #[validate(range(min = 0.0))]
    pub thighs: Option<f64>,

    #[validate(length(max = 20))]
    pub mood: Option<String>,

    #[validate(range(min = 1, max = 10, message = "Energy level must be between 1 and 10"))]
    pub energy_level: Option<i32>,

    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProgressLogResponse {
    pub id: i64,
    pub user_id: i64,
    pub log_date: NaiveDate,
    pub weight: Option<f64>,
    #[serde(rename = "bodyFat")]
    pub body_fat: Option<f64>,
    pub measurements: Measurements,
    pub mood: Option<String>,
    pub energy_level: Option<i32>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Log dates are compared against the current UTC date.
fn validate_not_in_future(date: &NaiveDate) -> Result<(), validator::ValidationError> {
    if *date > Utc::now().date_naive() {
        let mut error = validator::ValidationError::new("date_in_future");
        error.message = Some("Log date cannot be in the future".into());
        return Err(error);
    }
    Ok(())
}

/// Nested values win over top-level ones for the same measurement.
fn merge_measurements(nested: Option<&Measurements>, flat: Measurements) -> Measurements {
    let nested = nested.cloned().unwrap_or_default();
    Measurements {
        chest: nested.chest.or(flat.chest),
        waist: nested.waist.or(flat.waist),
        hips: nested.hips.or(flat.hips),
        arms: nested.arms.or(flat.arms),
        thighs: nested.thighs.or(flat.thighs),
    }
}

impl CreateProgressLogRequest {
    pub fn validate_all(&self) -> Result<(), validator::ValidationErrors> {
        validate_nested(self, "measurements", struct_errors(self.measurements.as_ref()))
    }

    pub fn measurements(&self) -> Measurements {
        merge_measurements(
            self.measurements.as_ref(),
            Measurements {
                chest: self.chest,
                waist: self.waist,
                hips: self.hips,
                arms: self.biceps,
                thighs: self.thighs,
            },
        )
    }
}

impl UpdateProgressLogRequest {
    pub fn validate_all(&self) -> Result<(), validator::ValidationErrors> {
        validate_nested(self, "measurements", struct_errors(self.measurements.as_ref()))
    }

    /// Only the measurements this update names; the rest stay `None`.
    pub fn measurements(&self) -> Measurements {
        merge_measurements(
            self.measurements.as_ref(),
            Measurements {
                chest: self.chest,
                waist: self.waist,
                hips: self.hips,
                arms: self.biceps,
                thighs: self.thighs,
            },
        )
    }
}

impl From<ProgressLog> for ProgressLogResponse {
    fn from(log: ProgressLog) -> Self {
        Self {
            id: log.id,
            user_id: log.user_id,
            log_date: log.log_date,
            weight: log.weight,
            body_fat: log.body_fat_percentage,
            measurements: Measurements {
                chest: log.chest,
                waist: log.waist,
                hips: log.hips,
                arms: log.biceps,
                thighs: log.thighs,
            },
            mood: log.mood,
            energy_level: log.energy_level,
            notes: log.notes,
            created_at: log.created_at,
        }
    }
}
