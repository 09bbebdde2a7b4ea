use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::workout::{CreateWorkoutRequest, UpdateWorkoutRequest, WorkoutResponse},
};

use crate::error::WebError;
use crate::extract::{ApiJson, ApiPath};
use crate::middleware::auth::CurrentUser;

use super::services;

#[utoipa::path(
    get,
    path = "/workouts",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "The caller's workouts, most recent first", body = Vec<WorkoutResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "workouts"
)]
pub async fn list_workouts(
    State(db): State<Database>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Response, WebError> {
    let workouts = services::list_workouts(&db, current.id()).await?;

    Ok(Json(workouts).into_response())
}

#[utoipa::path(
    get,
    path = "/workouts/{id}",
    params(
        ("id" = i64, Path, description = "Workout id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Workout found", body = WorkoutResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Workout not found")
    ),
    tag = "workouts"
)]
pub async fn get_workout(
    State(db): State<Database>,
    Extension(current): Extension<CurrentUser>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Response, WebError> {
    let workout = services::get_workout(&db, id, current.id()).await?;

    Ok(Json(workout).into_response())
}

#[utoipa::path(
    post,
    path = "/workouts",
    request_body = CreateWorkoutRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Workout created with its exercises", body = WorkoutResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "workouts"
)]
pub async fn create_workout(
    State(db): State<Database>,
    Extension(current): Extension<CurrentUser>,
    ApiJson(req): ApiJson<CreateWorkoutRequest>,
) -> Result<Response, WebError> {
    let workout = services::create_workout(&db, current.id(), &req).await?;

    Ok((StatusCode::CREATED, Json(workout)).into_response())
}

#[utoipa::path(
    put,
    path = "/workouts/{id}",
    params(
        ("id" = i64, Path, description = "Workout id")
    ),
    request_body = UpdateWorkoutRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Workout updated", body = WorkoutResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Workout not found")
    ),
    tag = "workouts"
)]
pub async fn update_workout(
    State(db): State<Database>,
    Extension(current): Extension<CurrentUser>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateWorkoutRequest>,
) -> Result<Response, WebError> {
    let workout = services::update_workout(&db, id, current.id(), &req).await?;

    Ok(Json(workout).into_response())
}

#[utoipa::path(
    delete,
    path = "/workouts/{id}",
    params(
        ("id" = i64, Path, description = "Workout id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Workout deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Workout not found")
    ),
    tag = "workouts"
)]
pub async fn delete_workout(
    State(db): State<Database>,
    Extension(current): Extension<CurrentUser>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Response, WebError> {
    services::delete_workout(&db, id, current.id()).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
