#![allow(dead_code)]

use serde::de::DeserializeOwned;
use storage::Database;
use storage::dto::user::RegisterRequest;
use storage::models::User;
use storage::repository::user::UserRepository;

pub const TEST_COST: u32 = 4;

pub async fn test_db() -> Database {
    Database::in_memory()
        .await
        .unwrap()
        .with_password_cost(TEST_COST)
}

/// Deserialize a request payload the way the API would receive it
pub fn payload<T: DeserializeOwned>(value: serde_json::Value) -> T {
    serde_json::from_value(value).unwrap()
}

pub async fn register(db: &Database, username: &str) -> User {
    let req: RegisterRequest = payload(serde_json::json!({
        "username": username,
        "email": format!("{username}@example.com"),
        "password": "pw12345",
    }));

    UserRepository::new(db.pool(), db.password_cost())
        .create(&req)
        .await
        .unwrap()
}
