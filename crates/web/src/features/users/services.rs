use storage::{
    Database, dto::user::UpdateUserRequest, error::Result, models::User,
    repository::user::UserRepository,
};

pub async fn update_user(db: &Database, existing: &User, req: &UpdateUserRequest) -> Result<User> {
    let repo = UserRepository::new(db.pool(), db.password_cost());
    repo.update(existing, req).await
}

/// Delete the account together with everything it owns
pub async fn delete_user(db: &Database, id: i64) -> Result<()> {
    let repo = UserRepository::new(db.pool(), db.password_cost());
    repo.delete(id).await
}
