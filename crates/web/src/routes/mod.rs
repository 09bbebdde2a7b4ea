use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::features;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/health", get(health))
        .merge(features::auth::routes::routes(state.clone()))
        .merge(features::users::routes::routes(state.clone()))
        .merge(features::workouts::routes::routes(state.clone()))
        .merge(features::exercises::routes::routes(state.clone()))
        .merge(features::workout_exercises::routes::routes(state.clone()))
        .merge(features::progress::routes::routes(state.clone()))
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "FitFlow API",
        "docs": "/swagger-ui"
    }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
