use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use storage::{error::StorageError, models::User, repository::user::UserRepository};

use crate::auth::Claims;
use crate::error::WebError;
use crate::state::AppState;

/// The authenticated caller, available to handlers as `Extension<CurrentUser>`.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: User,
    pub claims: Claims,
}

impl CurrentUser {
    pub fn id(&self) -> i64 {
        self.user.id
    }
}

pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let token = bearer_token(req.headers()).ok_or_else(|| {
        tracing::warn!("Missing or malformed Authorization header");
        WebError::Unauthorized
    })?;

    let claims = state.tokens.verify(token).map_err(|e| {
        tracing::warn!("Rejected token: {}", e);
        WebError::from(e)
    })?;

    let user_id = claims.user_id()?;

    let user = match UserRepository::new(state.db.pool(), state.db.password_cost())
        .find_by_id(user_id)
        .await
    {
        Ok(user) => user,
        Err(StorageError::NotFound) => {
            tracing::warn!(user_id, "Token refers to a user that no longer exists");
            return Err(WebError::Unauthorized);
        }
        Err(e) => return Err(e.into()),
    };

    req.extensions_mut().insert(CurrentUser { user, claims });

    Ok(next.run(req).await)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
