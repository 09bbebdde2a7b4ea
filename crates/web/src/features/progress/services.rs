use storage::{
    Database,
    dto::progress_log::{CreateProgressLogRequest, UpdateProgressLogRequest},
    error::Result,
    models::ProgressLog,
    repository::progress_log::ProgressLogRepository,
};

/// List the user's progress logs, newest first
pub async fn list_logs(db: &Database, user_id: i64) -> Result<Vec<ProgressLog>> {
    let repo = ProgressLogRepository::new(db.pool());
    repo.list_for_user(user_id).await
}

pub async fn get_log(db: &Database, id: i64, user_id: i64) -> Result<ProgressLog> {
    let repo = ProgressLogRepository::new(db.pool());
    repo.find_for_user(id, user_id).await
}

pub async fn create_log(
    db: &Database,
    user_id: i64,
    req: &CreateProgressLogRequest,
) -> Result<ProgressLog> {
    let repo = ProgressLogRepository::new(db.pool());
    repo.create(user_id, req).await
}

pub async fn update_log(
    db: &Database,
    id: i64,
    user_id: i64,
    req: &UpdateProgressLogRequest,
) -> Result<ProgressLog> {
    let repo = ProgressLogRepository::new(db.pool());
    repo.update(id, user_id, req).await
}

pub async fn delete_log(db: &Database, id: i64, user_id: i64) -> Result<()> {
    let repo = ProgressLogRepository::new(db.pool());
    repo.delete(id, user_id).await
}
