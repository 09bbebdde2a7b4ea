use sqlx::SqlitePool;
use validator::Validate;

use crate::dto::workout_exercise::{
    CreateWorkoutExerciseRequest, UpdateWorkoutExerciseRequest, WorkoutExerciseFilter,
};
use crate::error::{Result, StorageError};
use crate::models::WorkoutExercise;

const ENTRY_COLUMNS: &str = r#"
    id, user_id, workout_id, exercise_id, sets, reps, weight, duration, distance,
    calories_burned, order_index, notes, created_at
"#;

pub struct WorkoutExerciseRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> WorkoutExerciseRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_for_user(
        &self,
        user_id: i64,
        filter: &WorkoutExerciseFilter,
    ) -> Result<Vec<WorkoutExercise>> {
        let entries = sqlx::query_as::<_, WorkoutExercise>(&format!(
            r#"
            SELECT {ENTRY_COLUMNS}
            FROM workout_exercises
            WHERE user_id = ?1 AND (?2 IS NULL OR workout_id = ?2)
            ORDER BY workout_id, order_index, id
            "#
        ))
        .bind(user_id)
        .bind(filter.workout_id)
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    pub async fn find_for_user(&self, id: i64, user_id: i64) -> Result<WorkoutExercise> {
        let entry = sqlx::query_as::<_, WorkoutExercise>(&format!(
            "SELECT {ENTRY_COLUMNS} FROM workout_exercises WHERE id = ? AND user_id = ?"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(entry)
    }

    /// Link an exercise to one of the user's workouts.
    ///
    /// Fails with `NotFound` when the workout is not the user's or the
    /// exercise does not exist.
    pub async fn create(
        &self,
        user_id: i64,
        req: &CreateWorkoutExerciseRequest,
    ) -> Result<WorkoutExercise> {
        req.validate()?;

        let owns_workout = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM workouts WHERE id = ? AND user_id = ?)",
        )
        .bind(req.workout_id)
        .bind(user_id)
        .fetch_one(self.pool)
        .await?;

        let exercise_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM exercises WHERE id = ?)")
                .bind(req.exercise_id)
                .fetch_one(self.pool)
                .await?;

        if !owns_workout || !exercise_exists {
            return Err(StorageError::NotFound);
        }

        let entry = sqlx::query_as::<_, WorkoutExercise>(&format!(
            r#"
            INSERT INTO workout_exercises (user_id, workout_id, exercise_id, sets, reps, weight,
                                           duration, distance, calories_burned, order_index, notes)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {ENTRY_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(req.workout_id)
        .bind(req.exercise_id)
        .bind(req.sets)
        .bind(req.reps)
        .bind(req.weight)
        .bind(req.duration)
        .bind(req.distance)
        .bind(req.calories_burned)
        .bind(req.order)
        .bind(&req.notes)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let e = StorageError::from(e);
            // Workout or exercise deleted between the checks and the insert
            if e.is_foreign_key_violation() {
                StorageError::NotFound
            } else {
                e
            }
        })?;

        Ok(entry)
    }

    pub async fn update(
        &self,
        id: i64,
        user_id: i64,
        req: &UpdateWorkoutExerciseRequest,
    ) -> Result<WorkoutExercise> {
        req.validate()?;

        let existing = self.find_for_user(id, user_id).await?;

        let entry = sqlx::query_as::<_, WorkoutExercise>(&format!(
            r#"
            UPDATE workout_exercises
            SET sets = ?,
                reps = ?,
                weight = ?,
                duration = ?,
                distance = ?,
                calories_burned = ?,
                order_index = ?,
                notes = ?
            WHERE id = ? AND user_id = ?
            RETURNING {ENTRY_COLUMNS}
            "#
        ))
        .bind(req.sets.or(existing.sets))
        .bind(req.reps.or(existing.reps))
        .bind(req.weight.or(existing.weight))
        .bind(req.duration.or(existing.duration))
        .bind(req.distance.or(existing.distance))
        .bind(req.calories_burned.or(existing.calories_burned))
        .bind(req.order.or(existing.order_index))
        .bind(req.notes.as_ref().or(existing.notes.as_ref()))
        .bind(id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(entry)
    }

    pub async fn delete(&self, id: i64, user_id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM workout_exercises WHERE id = ? AND user_id = ?")
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
