use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::user::{UpdateUserRequest, UserResponse},
};

use crate::auth::TokenService;
use crate::error::WebError;
use crate::extract::ApiJson;
use crate::middleware::auth::CurrentUser;

use super::services;

#[utoipa::path(
    get,
    path = "/users/me",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Profile of the authenticated user", body = UserResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "users"
)]
pub async fn get_profile(Extension(current): Extension<CurrentUser>) -> Result<Response, WebError> {
    Ok(Json(UserResponse::from(current.user)).into_response())
}

#[utoipa::path(
    put,
    path = "/users/me",
    request_body = UpdateUserRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Profile updated", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Username or email already exists")
    ),
    tag = "users"
)]
pub async fn update_profile(
    State(db): State<Database>,
    Extension(current): Extension<CurrentUser>,
    ApiJson(req): ApiJson<UpdateUserRequest>,
) -> Result<Response, WebError> {
    let updated = services::update_user(&db, &current.user, &req).await?;

    Ok(Json(UserResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/users/me",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Account and all owned records deleted"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "users"
)]
pub async fn delete_profile(
    State(db): State<Database>,
    State(tokens): State<TokenService>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Response, WebError> {
    services::delete_user(&db, current.id()).await?;
    tokens.revoke(&current.claims);

    Ok(StatusCode::NO_CONTENT.into_response())
}
