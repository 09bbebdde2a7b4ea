use axum::extract::FromRef;
use storage::Database;

use crate::auth::TokenService;

/// Shared application state. Handlers extract the part they need.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(db: Database, tokens: TokenService) -> Self {
        Self { db, tokens }
    }
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for TokenService {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}
