use axum::{Router, middleware, routing::get};

use super::handlers::{create_entry, delete_entry, get_entry, list_entries, update_entry};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/workout_exercises", get(list_entries).post(create_entry))
        .route(
            "/workout_exercises/:id",
            get(get_entry).put(update_entry).delete(delete_entry),
        )
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
