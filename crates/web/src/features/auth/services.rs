use storage::{
    Database,
    dto::user::{LoginIdentifier, RegisterRequest},
    error::Result,
    models::User,
    repository::user::UserRepository,
};

/// Create the account
pub async fn register(db: &Database, req: &RegisterRequest) -> Result<User> {
    let repo = UserRepository::new(db.pool(), db.password_cost());
    repo.create(req).await
}

/// Look the account up and check its password.
///
/// `None` covers both an unknown identifier and a wrong password so callers
/// cannot tell them apart.
pub async fn authenticate(
    db: &Database,
    identifier: LoginIdentifier<'_>,
    password: &str,
) -> Result<Option<User>> {
    let repo = UserRepository::new(db.pool(), db.password_cost());

    let user = repo
        .find_by_login(identifier)
        .await?
        .filter(|user| user.check_password(password));

    Ok(user)
}
