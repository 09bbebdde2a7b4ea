use axum::{Router, middleware, routing::get};

use super::handlers::{delete_profile, get_profile, update_profile};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/users/me",
            get(get_profile).put(update_profile).delete(delete_profile),
        )
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
