use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::workout_exercise::{
        CreateWorkoutExerciseRequest, UpdateWorkoutExerciseRequest, WorkoutExerciseFilter,
        WorkoutExerciseResponse,
    },
};

use crate::error::WebError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::middleware::auth::CurrentUser;

use super::services;

#[utoipa::path(
    get,
    path = "/workout_exercises",
    params(WorkoutExerciseFilter),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "The caller's workout entries", body = Vec<WorkoutExerciseResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "workout_exercises"
)]
pub async fn list_entries(
    State(db): State<Database>,
    Extension(current): Extension<CurrentUser>,
    ApiQuery(filter): ApiQuery<WorkoutExerciseFilter>,
) -> Result<Response, WebError> {
    let entries = services::list_entries(&db, current.id(), &filter).await?;

    let response: Vec<WorkoutExerciseResponse> = entries
        .into_iter()
        .map(WorkoutExerciseResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/workout_exercises/{id}",
    params(
        ("id" = i64, Path, description = "Workout entry id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Workout entry found", body = WorkoutExerciseResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Workout entry not found")
    ),
    tag = "workout_exercises"
)]
pub async fn get_entry(
    State(db): State<Database>,
    Extension(current): Extension<CurrentUser>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Response, WebError> {
    let entry = services::get_entry(&db, id, current.id()).await?;

    Ok(Json(WorkoutExerciseResponse::from(entry)).into_response())
}

#[utoipa::path(
    post,
    path = "/workout_exercises",
    request_body = CreateWorkoutExerciseRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Exercise added to the workout", body = WorkoutExerciseResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Workout or exercise not found")
    ),
    tag = "workout_exercises"
)]
pub async fn create_entry(
    State(db): State<Database>,
    Extension(current): Extension<CurrentUser>,
    ApiJson(req): ApiJson<CreateWorkoutExerciseRequest>,
) -> Result<Response, WebError> {
    let entry = services::create_entry(&db, current.id(), &req).await?;

    Ok((StatusCode::CREATED, Json(WorkoutExerciseResponse::from(entry))).into_response())
}

#[utoipa::path(
    put,
    path = "/workout_exercises/{id}",
    params(
        ("id" = i64, Path, description = "Workout entry id")
    ),
    request_body = UpdateWorkoutExerciseRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Workout entry updated", body = WorkoutExerciseResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Workout entry not found")
    ),
    tag = "workout_exercises"
)]
pub async fn update_entry(
    State(db): State<Database>,
    Extension(current): Extension<CurrentUser>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateWorkoutExerciseRequest>,
) -> Result<Response, WebError> {
    let entry = services::update_entry(&db, id, current.id(), &req).await?;

    Ok(Json(WorkoutExerciseResponse::from(entry)).into_response())
}

#[utoipa::path(
    delete,
    path = "/workout_exercises/{id}",
    params(
        ("id" = i64, Path, description = "Workout entry id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Workout entry deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Workout entry not found")
    ),
    tag = "workout_exercises"
)]
pub async fn delete_entry(
    State(db): State<Database>,
    Extension(current): Extension<CurrentUser>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Response, WebError> {
    services::delete_entry(&db, id, current.id()).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
