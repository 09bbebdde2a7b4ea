use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Body metrics recorded by a user on a given day. Circumferences are in cm.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ProgressLog {
    pub id: i64,
    pub user_id: i64,
    pub log_date: chrono::NaiveDate,
    pub weight: Option<f64>,
    pub body_fat_percentage: Option<f64>,
    pub chest: Option<f64>,
    pub waist: Option<f64>,
    pub hips: Option<f64>,
    pub biceps: Option<f64>,
    pub thighs: Option<f64>,
    pub mood: Option<String>,
    pub energy_level: Option<i32>,
    pub notes: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}
