use std::collections::HashMap;

use chrono::Utc;
use sqlx::{SqliteConnection, SqlitePool};

use crate::dto::workout::{
    CreateWorkoutRequest, InlineExerciseRequest, UpdateWorkoutRequest, WorkoutExerciseDetail,
    WorkoutResponse,
};
use crate::error::{Result, StorageError};
use crate::models::Workout;
use crate::repository::exercise::find_or_create_by_name;

const WORKOUT_COLUMNS: &str = r#"
    id, user_id, name, description, date, duration, calories, workout_type, created_at
"#;

const DETAIL_SELECT: &str = r#"
    SELECT we.id, we.workout_id, we.exercise_id, e.name, e.category,
           we.sets, we.reps, we.weight, we.duration, we.distance,
           we.calories_burned, we.notes, we.order_index
    FROM workout_exercises we
    JOIN exercises e ON e.id = we.exercise_id
"#;

/// Repository for workouts. Every query is scoped to the owning user, so a
/// workout belonging to someone else is indistinguishable from a missing one.
pub struct WorkoutRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> WorkoutRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List the user's workouts, most recent first
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<Workout>> {
        let workouts = sqlx::query_as::<_, Workout>(&format!(
            r#"
            SELECT {WORKOUT_COLUMNS}
            FROM workouts
            WHERE user_id = ?
            ORDER BY date DESC, id DESC
            "#
        ))
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(workouts)
    }

    pub async fn find_for_user(&self, id: i64, user_id: i64) -> Result<Workout> {
        let workout = sqlx::query_as::<_, Workout>(&format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts WHERE id = ? AND user_id = ?"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(workout)
    }

    /// List the user's workouts with their exercises nested
    pub async fn list_detailed(&self, user_id: i64) -> Result<Vec<WorkoutResponse>> {
        let workouts = self.list_for_user(user_id).await?;

        let entries = sqlx::query_as::<_, WorkoutExerciseDetail>(&format!(
            r#"
            {DETAIL_SELECT}
            WHERE we.user_id = ?
            ORDER BY we.workout_id, we.order_index, we.id
            "#
        ))
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        let mut by_workout: HashMap<i64, Vec<WorkoutExerciseDetail>> = HashMap::new();
        for entry in entries {
            by_workout.entry(entry.workout_id).or_default().push(entry);
        }

        Ok(workouts
            .into_iter()
            .map(|workout| {
                let exercises = by_workout.remove(&workout.id).unwrap_or_default();
                WorkoutResponse::new(workout, exercises)
            })
            .collect())
    }

    /// Get one of the user's workouts with its exercises nested
    pub async fn find_detailed(&self, id: i64, user_id: i64) -> Result<WorkoutResponse> {
        let workout = self.find_for_user(id, user_id).await?;
        let exercises = self.exercises_for(workout.id).await?;

        Ok(WorkoutResponse::new(workout, exercises))
    }

    async fn exercises_for(&self, workout_id: i64) -> Result<Vec<WorkoutExerciseDetail>> {
        let exercises = sqlx::query_as::<_, WorkoutExerciseDetail>(&format!(
            r#"
            {DETAIL_SELECT}
            WHERE we.workout_id = ?
            ORDER BY we.order_index, we.id
            "#
        ))
        .bind(workout_id)
        .fetch_all(self.pool)
        .await?;

        Ok(exercises)
    }

    /// Create a workout together with its inline exercises.
    ///
    /// Unknown exercise names are added to the library. The workout, the new
    /// exercises and the links are written in one transaction: either all of
    /// them exist afterwards or none do.
    pub async fn create(&self, user_id: i64, req: &CreateWorkoutRequest) -> Result<WorkoutResponse> {
        req.validate_all()?;

        let date = req.date.unwrap_or_else(|| Utc::now().date_naive());

        let mut tx = self.pool.begin().await?;

        let workout_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO workouts (user_id, name, description, date, duration, calories, workout_type)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(&req.name)
        .bind(&req.description)
        .bind(date)
        .bind(req.duration)
        .bind(req.calories)
        .bind(&req.workout_type)
        .fetch_one(&mut *tx)
        .await?;

        link_inline_exercises(&mut *tx, user_id, workout_id, &req.exercises).await?;

        tx.commit().await?;

        tracing::info!(
            user_id,
            workout_id,
            exercises = req.exercises.len(),
            "Created workout"
        );

        self.find_detailed(workout_id, user_id).await
    }

    /// Apply a partial update. A present `exercises` list replaces the current
    /// one inside the same transaction as the field changes.
    pub async fn update(
        &self,
        id: i64,
        user_id: i64,
        req: &UpdateWorkoutRequest,
    ) -> Result<WorkoutResponse> {
        req.validate_all()?;

        let existing = self.find_for_user(id, user_id).await?;

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE workouts
            SET name = ?,
                description = ?,
                date = ?,
                duration = ?,
                calories = ?,
                workout_type = ?
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(req.name.as_ref().unwrap_or(&existing.name))
        .bind(req.description.as_ref().or(existing.description.as_ref()))
        .bind(req.date.unwrap_or(existing.date))
        .bind(req.duration.or(existing.duration))
        .bind(req.calories.or(existing.calories))
        .bind(req.workout_type.as_ref().or(existing.workout_type.as_ref()))
        .bind(id)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        if let Some(exercises) = &req.exercises {
            sqlx::query("DELETE FROM workout_exercises WHERE workout_id = ? AND user_id = ?")
                .bind(id)
                .bind(user_id)
                .execute(&mut *tx)
                .await?;

            link_inline_exercises(&mut *tx, user_id, id, exercises).await?;
        }

        tx.commit().await?;

        self.find_detailed(id, user_id).await
    }

    /// Delete one of the user's workouts and its exercise entries
    pub async fn delete(&self, id: i64, user_id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = ? AND user_id = ?")
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

async fn link_inline_exercises(
    conn: &mut SqliteConnection,
    user_id: i64,
    workout_id: i64,
    exercises: &[InlineExerciseRequest],
) -> Result<()> {
    for (index, item) in exercises.iter().enumerate() {
        let exercise_id = find_or_create_by_name(conn, &item.name).await?;
        let order = item
            .order
            .unwrap_or_else(|| i32::try_from(index).unwrap_or(i32::MAX));

        sqlx::query(
            r#"
            INSERT INTO workout_exercises (user_id, workout_id, exercise_id, sets, reps,
                                           weight, duration, distance, notes, order_index)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user_id)
        .bind(workout_id)
        .bind(exercise_id)
        .bind(item.sets)
        .bind(item.reps)
        .bind(item.weight)
        .bind(item.duration)
        .bind(item.distance)
        .bind(&item.notes)
        .bind(order)
        .execute(&mut *conn)
        .await?;
    }

    Ok(())
}
