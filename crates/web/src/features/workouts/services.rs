use storage::{
    Database,
    dto::workout::{CreateWorkoutRequest, UpdateWorkoutRequest, WorkoutResponse},
    error::Result,
    repository::workout::WorkoutRepository,
};

/// List the user's workouts with their exercises
pub async fn list_workouts(db: &Database, user_id: i64) -> Result<Vec<WorkoutResponse>> {
    let repo = WorkoutRepository::new(db.pool());
    repo.list_detailed(user_id).await
}

pub async fn get_workout(db: &Database, id: i64, user_id: i64) -> Result<WorkoutResponse> {
    let repo = WorkoutRepository::new(db.pool());
    repo.find_detailed(id, user_id).await
}

pub async fn create_workout(
    db: &Database,
    user_id: i64,
    req: &CreateWorkoutRequest,
) -> Result<WorkoutResponse> {
    let repo = WorkoutRepository::new(db.pool());
    repo.create(user_id, req).await
}

pub async fn update_workout(
    db: &Database,
    id: i64,
    user_id: i64,
    req: &UpdateWorkoutRequest,
) -> Result<WorkoutResponse> {
    let repo = WorkoutRepository::new(db.pool());
    repo.update(id, user_id, req).await
}

pub async fn delete_workout(db: &Database, id: i64, user_id: i64) -> Result<()> {
    let repo = WorkoutRepository::new(db.pool());
    repo.delete(id, user_id).await
}
