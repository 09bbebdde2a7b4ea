use storage::{
    Database,
    dto::exercise::{CreateExerciseRequest, ExerciseFilter, UpdateExerciseRequest},
    error::Result,
    models::Exercise,
    repository::exercise::ExerciseRepository,
};

pub async fn list_exercises(db: &Database, filter: &ExerciseFilter) -> Result<Vec<Exercise>> {
    let repo = ExerciseRepository::new(db.pool());
    repo.list(filter).await
}

pub async fn get_exercise(db: &Database, id: i64) -> Result<Exercise> {
    let repo = ExerciseRepository::new(db.pool());
    repo.find_by_id(id).await
}

pub async fn create_exercise(db: &Database, req: &CreateExerciseRequest) -> Result<Exercise> {
    let repo = ExerciseRepository::new(db.pool());
    repo.create(req).await
}

/// Update exercise
pub async fn update_exercise(
    db: &Database,
    id: i64,
    req: &UpdateExerciseRequest,
) -> Result<Exercise> {
    let repo = ExerciseRepository::new(db.pool());
    let existing = repo.find_by_id(id).await?;
    repo.update(&existing, req).await
}

pub async fn delete_exercise(db: &Database, id: i64) -> Result<()> {
    let repo = ExerciseRepository::new(db.pool());
    repo.delete(id).await
}
