use storage::{
    Database,
    dto::workout_exercise::{
        CreateWorkoutExerciseRequest, UpdateWorkoutExerciseRequest, WorkoutExerciseFilter,
    },
    error::Result,
    models::WorkoutExercise,
    repository::workout_exercise::WorkoutExerciseRepository,
};

pub async fn list_entries(
    db: &Database,
    user_id: i64,
    filter: &WorkoutExerciseFilter,
) -> Result<Vec<WorkoutExercise>> {
    let repo = WorkoutExerciseRepository::new(db.pool());
    repo.list_for_user(user_id, filter).await
}

pub async fn get_entry(db: &Database, id: i64, user_id: i64) -> Result<WorkoutExercise> {
    let repo = WorkoutExerciseRepository::new(db.pool());
    repo.find_for_user(id, user_id).await
}

pub async fn create_entry(
    db: &Database,
    user_id: i64,
    req: &CreateWorkoutExerciseRequest,
) -> Result<WorkoutExercise> {
    let repo = WorkoutExerciseRepository::new(db.pool());
    repo.create(user_id, req).await
}

pub async fn update_entry(
    db: &Database,
    id: i64,
    user_id: i64,
    req: &UpdateWorkoutExerciseRequest,
) -> Result<WorkoutExercise> {
    let repo = WorkoutExerciseRepository::new(db.pool());
    repo.update(id, user_id, req).await
}

pub async fn delete_entry(db: &Database, id: i64, user_id: i64) -> Result<()> {
    let repo = WorkoutExerciseRepository::new(db.pool());
    repo.delete(id, user_id).await
}
