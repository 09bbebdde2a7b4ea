use axum::{Router, middleware, routing::get};

use super::handlers::{
    create_exercise, delete_exercise, get_exercise, list_exercises, update_exercise,
};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/exercises", get(list_exercises).post(create_exercise))
        .route(
            "/exercises/:id",
            get(get_exercise).put(update_exercise).delete(delete_exercise),
        )
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
