use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use storage::{
    Database,
    dto::user::{LoginRequest, RegisterRequest, UserResponse},
    models::User,
};
use utoipa::ToSchema;

use crate::auth::TokenService;
use crate::error::WebError;
use crate::extract::ApiJson;
use crate::middleware::auth::CurrentUser;

use super::services;

/// Token handed out on register and login
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
    /// Always `Bearer`
    pub token_type: String,
    /// Seconds until the token expires
    pub expires_in: i64,
    pub user: UserResponse,
}

fn auth_response(tokens: &TokenService, user: User) -> Result<AuthResponse, WebError> {
    let issued = tokens.issue(&user)?;

    Ok(AuthResponse {
        token: issued.token,
        token_type: "Bearer".to_string(),
        expires_in: issued.expires_in,
        user: UserResponse::from(user),
    })
}

#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = AuthResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Username or email already exists")
    ),
    tag = "auth"
)]
pub async fn register(
    State(db): State<Database>,
    State(tokens): State<TokenService>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> Result<Response, WebError> {
    let user = services::register(&db, &req).await?;

    Ok((StatusCode::CREATED, Json(auth_response(&tokens, user)?)).into_response())
}

#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = AuthResponse),
        (status = 400, description = "Neither username nor email given"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    State(db): State<Database>,
    State(tokens): State<TokenService>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<Response, WebError> {
    let identifier = req
        .identifier()
        .ok_or_else(|| WebError::BadRequest("Username or email is required".to_string()))?;

    let user = services::authenticate(&db, identifier, &req.password)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Failed login attempt for '{}'", identifier.as_str());
            WebError::Unauthorized
        })?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(auth_response(&tokens, user)?).into_response())
}

#[utoipa::path(
    get,
    path = "/auth/me",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "The authenticated user", body = UserResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "auth"
)]
pub async fn me(Extension(current): Extension<CurrentUser>) -> Result<Response, WebError> {
    Ok(Json(UserResponse::from(current.user)).into_response())
}

#[utoipa::path(
    post,
    path = "/logout",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Token revoked"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "auth"
)]
pub async fn logout(
    State(tokens): State<TokenService>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Response, WebError> {
    tokens.revoke(&current.claims);

    Ok(Json(json!({ "message": "Logged out" })).into_response())
}
