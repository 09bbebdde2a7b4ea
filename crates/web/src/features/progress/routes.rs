use axum::{Router, middleware, routing::get};

use super::handlers::{create_log, delete_log, get_log, list_logs, update_log};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

/// Mounted at `/progress_logs` and again at the shorter `/progress`.
pub fn routes(state: AppState) -> Router<AppState> {
    let mut router = Router::new();

    for base in ["/progress_logs", "/progress"] {
        router = router
            .route(base, get(list_logs).post(create_log))
            .route(
                &format!("{base}/:id"),
                get(get_log).put(update_log).delete(delete_log),
            );
    }

    router.route_layer(middleware::from_fn_with_state(state, require_auth))
}
