use sqlx::SqlitePool;
use validator::Validate;

use crate::dto::user::{LoginIdentifier, RegisterRequest, UpdateUserRequest};
use crate::error::{Result, StorageError};
use crate::models::User;
use crate::password;

const USER_COLUMNS: &str = r#"
    id, username, email, password_hash, age, height, weight, fitness_goal,
    target_weight, experience_level, daily_calorie_goal, created_at, updated_at
"#;

pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
    password_cost: u32,
}

impl<'a> UserRepository<'a> {
    pub fn new(pool: &'a SqlitePool, password_cost: u32) -> Self {
        Self {
            pool,
            password_cost,
        }
    }

    /// Find user by ID
    pub async fn find_by_id(&self, id: i64) -> Result<User> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(user)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = ?"
        ))
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = ?"
        ))
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Find user by the column the login names
    pub async fn find_by_login(&self, identifier: LoginIdentifier<'_>) -> Result<Option<User>> {
        match identifier {
            LoginIdentifier::Username(username) => self.find_by_username(username).await,
            LoginIdentifier::Email(email) => self.find_by_email(email).await,
        }
    }

    /// Register a new user, hashing the password with a fresh salt
    pub async fn create(&self, req: &RegisterRequest) -> Result<User> {
        req.validate()?;

        self.ensure_unique(Some(&req.username), Some(&req.email), None)
            .await?;

        let password_hash = password::set_password(&req.password, self.password_cost)?;

        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (username, email, password_hash, age, height, weight,
                               fitness_goal, target_weight, experience_level, daily_calorie_goal)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&req.username)
        .bind(&req.email)
        .bind(&password_hash)
        .bind(req.age)
        .bind(req.height)
        .bind(req.weight)
        .bind(&req.fitness_goal)
        .bind(req.target_weight)
        .bind(req.experience_level.as_deref().unwrap_or("Beginner"))
        .bind(req.daily_calorie_goal)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).on_unique_violation("Username or email already exists")
        })?;

        tracing::info!(user_id = user.id, "Registered user {}", user.username);

        Ok(user)
    }

    /// Apply a partial profile update
    pub async fn update(&self, existing: &User, req: &UpdateUserRequest) -> Result<User> {
        req.validate()?;

        let username = req.username.as_ref().unwrap_or(&existing.username);
        let email = req.email.as_ref().unwrap_or(&existing.email);

        self.ensure_unique(
            req.username.as_deref().filter(|u| *u != existing.username),
            req.email.as_deref().filter(|e| *e != existing.email),
            Some(existing.id),
        )
        .await?;

        let password_hash = match &req.password {
            Some(plaintext) => password::set_password(plaintext, self.password_cost)?,
            None => existing.password_hash.clone(),
        };

        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            UPDATE users
            SET username = ?,
                email = ?,
                password_hash = ?,
                age = ?,
                height = ?,
                weight = ?,
                fitness_goal = ?,
                target_weight = ?,
                experience_level = ?,
                daily_calorie_goal = ?,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = ?
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(username)
        .bind(email)
        .bind(&password_hash)
        .bind(req.age.or(existing.age))
        .bind(req.height.or(existing.height))
        .bind(req.weight.or(existing.weight))
        .bind(req.fitness_goal.as_ref().or(existing.fitness_goal.as_ref()))
        .bind(req.target_weight.or(existing.target_weight))
        .bind(
            req.experience_level
                .as_ref()
                .unwrap_or(&existing.experience_level),
        )
        .bind(req.daily_calorie_goal.or(existing.daily_calorie_goal))
        .bind(existing.id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).on_unique_violation("Username or email already exists")
        })?
        .ok_or(StorageError::NotFound)?;

        Ok(user)
    }

    /// Delete a user; workouts, workout exercises and progress logs go with it
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        tracing::info!(user_id = id, "Deleted user and owned records");

        Ok(())
    }

    async fn ensure_unique(
        &self,
        username: Option<&str>,
        email: Option<&str>,
        except_id: Option<i64>,
    ) -> Result<()> {
        if let Some(username) = username {
            if let Some(found) = self.find_by_username(username).await? {
                if Some(found.id) != except_id {
                    return Err(StorageError::ConstraintViolation(
                        "Username already exists".to_string(),
                    ));
                }
            }
        }

        if let Some(email) = email {
            if let Some(found) = self.find_by_email(email).await? {
                if Some(found.id) != except_id {
                    return Err(StorageError::ConstraintViolation(
                        "Email already exists".to_string(),
                    ));
                }
            }
        }

        Ok(())
    }
}
