use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::progress_log::{CreateProgressLogRequest, ProgressLogResponse, UpdateProgressLogRequest},
};

use crate::error::WebError;
use crate::extract::{ApiJson, ApiPath};
use crate::middleware::auth::CurrentUser;

use super::services;

#[utoipa::path(
    get,
    path = "/progress_logs",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "The caller's progress logs, newest first", body = Vec<ProgressLogResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "progress"
)]
pub async fn list_logs(
    State(db): State<Database>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Response, WebError> {
    let logs = services::list_logs(&db, current.id()).await?;

    let response: Vec<ProgressLogResponse> =
        logs.into_iter().map(ProgressLogResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/progress_logs/{id}",
    params(
        ("id" = i64, Path, description = "Progress log id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Progress log found", body = ProgressLogResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Progress log not found")
    ),
    tag = "progress"
)]
pub async fn get_log(
    State(db): State<Database>,
    Extension(current): Extension<CurrentUser>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Response, WebError> {
    let log = services::get_log(&db, id, current.id()).await?;

    Ok(Json(ProgressLogResponse::from(log)).into_response())
}

#[utoipa::path(
    post,
    path = "/progress_logs",
    request_body = CreateProgressLogRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Progress recorded", body = ProgressLogResponse),
        (status = 400, description = "Validation error, including a log date in the future"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "progress"
)]
pub async fn create_log(
    State(db): State<Database>,
    Extension(current): Extension<CurrentUser>,
    ApiJson(req): ApiJson<CreateProgressLogRequest>,
) -> Result<Response, WebError> {
    let log = services::create_log(&db, current.id(), &req).await?;

    Ok((StatusCode::CREATED, Json(ProgressLogResponse::from(log))).into_response())
}

#[utoipa::path(
    put,
    path = "/progress_logs/{id}",
    params(
        ("id" = i64, Path, description = "Progress log id")
    ),
    request_body = UpdateProgressLogRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Progress log updated", body = ProgressLogResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Progress log not found")
    ),
    tag = "progress"
)]
pub async fn update_log(
    State(db): State<Database>,
    Extension(current): Extension<CurrentUser>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateProgressLogRequest>,
) -> Result<Response, WebError> {
    let log = services::update_log(&db, id, current.id(), &req).await?;

    Ok(Json(ProgressLogResponse::from(log)).into_response())
}

#[utoipa::path(
    delete,
    path = "/progress_logs/{id}",
    params(
        ("id" = i64, Path, description = "Progress log id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Progress log deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Progress log not found")
    ),
    tag = "progress"
)]
pub async fn delete_log(
    State(db): State<Database>,
    Extension(current): Extension<CurrentUser>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Response, WebError> {
    services::delete_log(&db, id, current.id()).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
