use sqlx::SqlitePool;

use crate::dto::progress_log::{CreateProgressLogRequest, Measurements, UpdateProgressLogRequest};
use crate::error::{Result, StorageError};
use crate::models::ProgressLog;

const LOG_COLUMNS: &str = r#"
    id, user_id, log_date, weight, body_fat_percentage, chest, waist, hips, biceps,
    thighs, mood, energy_level, notes, created_at
"#;

pub struct ProgressLogRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProgressLogRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List the user's logs, newest first
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<ProgressLog>> {
        let logs = sqlx::query_as::<_, ProgressLog>(&format!(
            r#"
            SELECT {LOG_COLUMNS}
            FROM progress_logs
            WHERE user_id = ?
            ORDER BY log_date DESC, id DESC
            "#
        ))
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(logs)
    }

    pub async fn find_for_user(&self, id: i64, user_id: i64) -> Result<ProgressLog> {
        let log = sqlx::query_as::<_, ProgressLog>(&format!(
            "SELECT {LOG_COLUMNS} FROM progress_logs WHERE id = ? AND user_id = ?"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(log)
    }

    pub async fn create(&self, user_id: i64, req: &CreateProgressLogRequest) -> Result<ProgressLog> {
        req.validate_all()?;

        let measurements = req.measurements();

        let log = sqlx::query_as::<_, ProgressLog>(&format!(
            r#"
            INSERT INTO progress_logs (user_id, log_date, weight, body_fat_percentage, chest, waist,
                                       hips, biceps, thighs, mood, energy_level, notes)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {LOG_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(req.log_date)
        .bind(req.weight)
        .bind(req.body_fat)
        .bind(measurements.chest)
        .bind(measurements.waist)
        .bind(measurements.hips)
        .bind(measurements.arms)
        .bind(measurements.thighs)
        .bind(&req.mood)
        .bind(req.energy_level)
        .bind(&req.notes)
        .fetch_one(self.pool)
        .await?;

        tracing::info!(user_id, log_id = log.id, "Recorded progress for {}", log.log_date);

        Ok(log)
    }

    pub async fn update(
        &self,
        id: i64,
        user_id: i64,
        req: &UpdateProgressLogRequest,
    ) -> Result<ProgressLog> {
        req.validate_all()?;

        let existing = self.find_for_user(id, user_id).await?;
        let changes = req.measurements();
        let measurements = Measurements {
            chest: changes.chest.or(existing.chest),
            waist: changes.waist.or(existing.waist),
            hips: changes.hips.or(existing.hips),
            arms: changes.arms.or(existing.biceps),
            thighs: changes.thighs.or(existing.thighs),
        };

        let log = sqlx::query_as::<_, ProgressLog>(&format!(
            r#"
            UPDATE progress_logs
            SET log_date = ?,
                weight = ?,
                body_fat_percentage = ?,
                chest = ?,
                waist = ?,
                hips = ?,
                biceps = ?,
                thighs = ?,
                mood = ?,
                energy_level = ?,
                notes = ?
            WHERE id = ? AND user_id = ?
            RETURNING {LOG_COLUMNS}
            "#
        ))
        .bind(req.log_date.unwrap_or(existing.log_date))
        .bind(req.weight.or(existing.weight))
        .bind(req.body_fat.or(existing.body_fat_percentage))
        .bind(measurements.chest)
        .bind(measurements.waist)
        .bind(measurements.hips)
        .bind(measurements.arms)
        .bind(measurements.thighs)
        .bind(req.mood.as_ref().or(existing.mood.as_ref()))
        .bind(req.energy_level.or(existing.energy_level))
        .bind(req.notes.as_ref().or(existing.notes.as_ref()))
        .bind(id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(log)
    }

    pub async fn delete(&self, id: i64, user_id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM progress_logs WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
