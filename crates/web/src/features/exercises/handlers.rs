use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::exercise::{
        CreateExerciseRequest, ExerciseFilter, ExerciseResponse, UpdateExerciseRequest,
    },
};

use crate::error::WebError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};

use super::services;

#[utoipa::path(
    get,
    path = "/exercises",
    params(ExerciseFilter),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Exercise library, sorted by name", body = Vec<ExerciseResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "exercises"
)]
pub async fn list_exercises(
    State(db): State<Database>,
    ApiQuery(filter): ApiQuery<ExerciseFilter>,
) -> Result<Response, WebError> {
    let exercises = services::list_exercises(&db, &filter).await?;

    let response: Vec<ExerciseResponse> =
        exercises.into_iter().map(ExerciseResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/exercises/{id}",
    params(
        ("id" = i64, Path, description = "Exercise id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Exercise found", body = ExerciseResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Exercise not found")
    ),
    tag = "exercises"
)]
pub async fn get_exercise(
    State(db): State<Database>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Response, WebError> {
    let exercise = services::get_exercise(&db, id).await?;

    Ok(Json(ExerciseResponse::from(exercise)).into_response())
}

#[utoipa::path(
    post,
    path = "/exercises",
    request_body = CreateExerciseRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Exercise created", body = ExerciseResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Exercise name already exists")
    ),
    tag = "exercises"
)]
pub async fn create_exercise(
    State(db): State<Database>,
    ApiJson(req): ApiJson<CreateExerciseRequest>,
) -> Result<Response, WebError> {
    let exercise = services::create_exercise(&db, &req).await?;

    Ok((StatusCode::CREATED, Json(ExerciseResponse::from(exercise))).into_response())
}

#[utoipa::path(
    put,
    path = "/exercises/{id}",
    params(
        ("id" = i64, Path, description = "Exercise id")
    ),
    request_body = UpdateExerciseRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Exercise updated", body = ExerciseResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Exercise not found"),
        (status = 409, description = "Exercise name already exists")
    ),
    tag = "exercises"
)]
pub async fn update_exercise(
    State(db): State<Database>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateExerciseRequest>,
) -> Result<Response, WebError> {
    let updated = services::update_exercise(&db, id, &req).await?;

    Ok(Json(ExerciseResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/exercises/{id}",
    params(
        ("id" = i64, Path, description = "Exercise id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Exercise and the workout entries using it deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Exercise not found")
    ),
    tag = "exercises"
)]
pub async fn delete_exercise(
    State(db): State<Database>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Response, WebError> {
    services::delete_exercise(&db, id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
