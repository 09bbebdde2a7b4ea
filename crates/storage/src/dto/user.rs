use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::User;
use crate::password::MAX_PASSWORD_BYTES;

/// Request payload for creating an account
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(
        min = 3,
        max = 50,
        message = "Username must be between 3 and 50 characters"
    ))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    #[validate(length(max = 100))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    #[validate(custom(function = "validate_password_bytes"))]
    pub password: String,

    #[validate(range(min = 13, max = 120, message = "Age must be between 13 and 120"))]
    pub age: Option<i32>,

    /// Centimetres
    #[validate(range(min = 0.0))]
    pub height: Option<f64>,

    /// Kilograms
    #[validate(range(min = 0.0))]
    pub weight: Option<f64>,

    #[validate(length(max = 200))]
    pub fitness_goal: Option<String>,

    #[validate(range(min = 0.0))]
    pub target_weight: Option<f64>,

    #[validate(custom(function = "validate_experience_level"))]
    pub experience_level: Option<String>,

    #[validate(range(min = 0))]
    pub daily_calorie_goal: Option<i32>,
}

/// Login with either a username or an email address
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: String,
}

/// Which account column a login is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginIdentifier<'a> {
    Username(&'a str),
    Email(&'a str),
}

impl LoginIdentifier<'_> {
    pub fn as_str(&self) -> &str {
        match self {
            LoginIdentifier::Username(value) | LoginIdentifier::Email(value) => *value,
        }
    }
}

impl LoginRequest {
    /// The identifier to look the account up by, username taking precedence.
    pub fn identifier(&self) -> Option<LoginIdentifier<'_>> {
        non_blank(&self.username)
            .map(LoginIdentifier::Username)
            .or_else(|| non_blank(&self.email).map(LoginIdentifier::Email))
    }
}

/// Partial profile update. Fields left out keep their current value.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateUserRequest {
    #[validate(length(
        min = 3,
        max = 50,
        message = "Username must be between 3 and 50 characters"
    ))]
    #[validate(custom(function = "validate_username"))]
    pub username: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    #[validate(length(max = 100))]
    pub email: Option<String>,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    #[validate(custom(function = "validate_password_bytes"))]
    pub password: Option<String>,

    #[validate(range(min = 13, max = 120, message = "Age must be between 13 and 120"))]
    pub age: Option<i32>,

    #[validate(range(min = 0.0))]
    pub height: Option<f64>,

    #[validate(range(min = 0.0))]
    pub weight: Option<f64>,

    #[validate(length(max = 200))]
    pub fitness_goal: Option<String>,

    #[validate(range(min = 0.0))]
    pub target_weight: Option<f64>,

    #[validate(custom(function = "validate_experience_level"))]
    pub experience_level: Option<String>,

    #[validate(range(min = 0))]
    pub daily_calorie_goal: Option<i32>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Public view of a user; never carries the password hash
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub age: Option<i32>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub fitness_goal: Option<String>,
    pub target_weight: Option<f64>,
    pub experience_level: String,
    pub daily_calorie_goal: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

fn validate_username(username: &str) -> Result<(), validator::ValidationError> {
    if username.trim() != username {
        let mut error = validator::ValidationError::new("username_whitespace");
        error.message = Some("Username must not start or end with whitespace".into());
        return Err(error);
    }
    Ok(())
}

/// Counts bytes, not characters: multibyte input reaches the limit sooner.
fn validate_password_bytes(password: &str) -> Result<(), validator::ValidationError> {
    if password.len() > MAX_PASSWORD_BYTES {
        let mut error = validator::ValidationError::new("password_too_long");
        error.message =
            Some(format!("Password must be at most {MAX_PASSWORD_BYTES} bytes").into());
        return Err(error);
    }
    Ok(())
}

fn validate_experience_level(level: &str) -> Result<(), validator::ValidationError> {
    const VALID_LEVELS: &[&str] = &["Beginner", "Intermediate", "Advanced"];

    if VALID_LEVELS.contains(&level) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_experience_level"))
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            age: user.age,
            height: user.height,
            weight: user.weight,
            fitness_goal: user.fitness_goal,
            target_weight: user.target_weight,
            experience_level: user.experience_level,
            daily_calorie_goal: user.daily_calorie_goal,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(username: &str, email: &str) -> RegisterRequest {
        serde_json::from_value(serde_json::json!({
            "username": username,
            "email": email,
            "password": "pw12345",
        }))
        .unwrap()
    }

    #[test]
    fn test_register_accepts_minimal_payload() {
        assert!(register("alice", "a@x.com").validate().is_ok());
    }

    #[test]
    fn test_register_rejects_short_username_and_bad_email() {
        let errors = register("al", "not-an-email").validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("username"));
        assert!(fields.contains_key("email"));
    }

    #[test]
    fn test_register_rejects_out_of_range_age() {
        let mut req = register("alice", "a@x.com");
        req.age = Some(12);
        assert!(req.validate().is_err());
        req.age = Some(121);
        assert!(req.validate().is_err());
        req.age = Some(13);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_update_rejects_unknown_fields() {
        let result = serde_json::from_value::<UpdateUserRequest>(serde_json::json!({
            "password_hash": "$2b$04$abc",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_login_identifier_prefers_username() {
        let req: LoginRequest = serde_json::from_value(serde_json::json!({
            "username": "alice",
            "email": "a@x.com",
            "password": "pw",
        }))
        .unwrap();
        assert_eq!(req.identifier(), Some(LoginIdentifier::Username("alice")));

        let req: LoginRequest = serde_json::from_value(serde_json::json!({
            "email": "a@x.com",
            "password": "pw",
        }))
        .unwrap();
        assert_eq!(req.identifier(), Some(LoginIdentifier::Email("a@x.com")));
    }

    #[test]
    fn test_login_without_identifier() {
        let req: LoginRequest =
            serde_json::from_value(serde_json::json!({ "username": "  ", "password": "pw" }))
                .unwrap();
        assert_eq!(req.identifier(), None);
    }

    #[test]
    fn test_login_blank_username_falls_back_to_email() {
        let req: LoginRequest = serde_json::from_value(serde_json::json!({
            "username": " ",
            "email": " a@x.com ",
            "password": "pw",
        }))
        .unwrap();
        assert_eq!(req.identifier(), Some(LoginIdentifier::Email("a@x.com")));
    }

    #[test]
    fn test_register_rejects_username_with_surrounding_whitespace() {
        let errors = register("alice ", "a@x.com").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));

        let update = UpdateUserRequest {
            username: Some(" alice".to_string()),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn test_password_limit_counts_bytes() {
        let mut req = register("alice", "a@x.com");

        req.password = "a".repeat(MAX_PASSWORD_BYTES);
        assert!(req.validate().is_ok());

        req.password = "a".repeat(MAX_PASSWORD_BYTES + 1);
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));

        // 40 characters, 80 bytes
        req.password = "é".repeat(40);
        assert!(req.validate().is_err());
    }
}
