use sqlx::{SqliteConnection, SqlitePool};
use validator::Validate;

use crate::dto::exercise::{CreateExerciseRequest, ExerciseFilter, UpdateExerciseRequest};
use crate::error::{Result, StorageError};
use crate::models::{Exercise, ExerciseCategory};

const EXERCISE_COLUMNS: &str = r#"
    id, name, category, muscle_group, equipment, difficulty, description,
    instructions, calories_per_minute, created_at
"#;

const DUPLICATE_NAME: &str = "Exercise name already exists";

/// Description given to exercises created from a workout log.
pub const PLACEHOLDER_DESCRIPTION: &str = "Added from a workout log";

/// Repository for the shared exercise library. Exercises have no owner.
pub struct ExerciseRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ExerciseRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List exercises, optionally restricted to one category
    pub async fn list(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>> {
        let exercises = sqlx::query_as::<_, Exercise>(&format!(
            r#"
            SELECT {EXERCISE_COLUMNS}
            FROM exercises
            WHERE (?1 IS NULL OR category = ?1)
            ORDER BY name
            "#
        ))
        .bind(filter.category.as_deref())
        .fetch_all(self.pool)
        .await?;

        Ok(exercises)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Exercise> {
        let exercise = sqlx::query_as::<_, Exercise>(&format!(
            "SELECT {EXERCISE_COLUMNS} FROM exercises WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(exercise)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Exercise>> {
        let exercise = sqlx::query_as::<_, Exercise>(&format!(
            "SELECT {EXERCISE_COLUMNS} FROM exercises WHERE name = ?"
        ))
        .bind(name)
        .fetch_optional(self.pool)
        .await?;

        Ok(exercise)
    }

    pub async fn create(&self, req: &CreateExerciseRequest) -> Result<Exercise> {
        req.validate()?;

        let exercise = sqlx::query_as::<_, Exercise>(&format!(
            r#"
            INSERT INTO exercises (name, category, muscle_group, equipment, difficulty,
                                   description, instructions, calories_per_minute)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {EXERCISE_COLUMNS}
            "#
        ))
        .bind(&req.name)
        .bind(&req.category)
        .bind(&req.muscle_group)
        .bind(&req.equipment)
        .bind(req.difficulty.as_deref().unwrap_or("Intermediate"))
        .bind(&req.description)
        .bind(&req.instructions)
        .bind(req.calories_per_minute)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_unique_violation(DUPLICATE_NAME))?;

        tracing::info!(exercise_id = exercise.id, "Created exercise {}", exercise.name);

        Ok(exercise)
    }

    pub async fn update(&self, existing: &Exercise, req: &UpdateExerciseRequest) -> Result<Exercise> {
        req.validate()?;

        let exercise = sqlx::query_as::<_, Exercise>(&format!(
            r#"
            UPDATE exercises
            SET name = ?,
                category = ?,
                muscle_group = ?,
                equipment = ?,
                difficulty = ?,
                description = ?,
                instructions = ?,
                calories_per_minute = ?
            WHERE id = ?
            RETURNING {EXERCISE_COLUMNS}
            "#
        ))
        .bind(req.name.as_ref().unwrap_or(&existing.name))
        .bind(req.category.as_ref().unwrap_or(&existing.category))
        .bind(req.muscle_group.as_ref().or(existing.muscle_group.as_ref()))
        .bind(req.equipment.as_ref().or(existing.equipment.as_ref()))
        .bind(req.difficulty.as_ref().unwrap_or(&existing.difficulty))
        .bind(req.description.as_ref().or(existing.description.as_ref()))
        .bind(req.instructions.as_ref().or(existing.instructions.as_ref()))
        .bind(req.calories_per_minute.or(existing.calories_per_minute))
        .bind(existing.id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_unique_violation(DUPLICATE_NAME))?
        .ok_or(StorageError::NotFound)?;

        Ok(exercise)
    }

    /// Delete an exercise; every workout entry referencing it goes too
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM exercises WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

/// Resolve an exercise id by exact name, adding it to the library if missing.
///
/// Runs on the caller's connection so it can share a transaction with the
/// workout being written.
pub(crate) async fn find_or_create_by_name(conn: &mut SqliteConnection, name: &str) -> Result<i64> {
    let inserted = sqlx::query(
        r#"
        INSERT INTO exercises (name, category, description)
        VALUES (?, ?, ?)
        ON CONFLICT (name) DO NOTHING
        "#,
    )
    .bind(name)
    .bind(ExerciseCategory::default().as_str())
    .bind(PLACEHOLDER_DESCRIPTION)
    .execute(&mut *conn)
    .await?;

    if inserted.rows_affected() > 0 {
        tracing::info!("Added exercise '{}' to the library", name);
    }

    let id = sqlx::query_scalar::<_, i64>("SELECT id FROM exercises WHERE name = ?")
        .bind(name)
        .fetch_one(&mut *conn)
        .await?;

    Ok(id)
}
