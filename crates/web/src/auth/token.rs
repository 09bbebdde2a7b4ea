//! Signed bearer tokens.
//!
//! Tokens are HS256 JWTs carrying the user id in `sub` and a random `jti`
//! so a single token can be revoked without touching the others.

use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use storage::models::User;
use thiserror::Error;
use uuid::Uuid;

use super::blacklist::TokenBlacklist;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: Uuid,
}

impl Claims {
    pub fn user_id(&self) -> Result<i64, TokenError> {
        self.sub.parse().map_err(|_| TokenError::Malformed)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Malformed token")]
    Malformed,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token has expired")]
    Expired,

    #[error("Token has been revoked")]
    Revoked,

    #[error("Token could not be signed: {0}")]
    Signing(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(error: jsonwebtoken::errors::Error) -> Self {
        match error.kind() {
            ErrorKind::ExpiredSignature => Self::Expired,
            ErrorKind::InvalidSignature => Self::InvalidSignature,
            _ => Self::Malformed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub claims: Claims,
    pub expires_in: i64,
}

/// Issues and verifies tokens; shares one revocation list across clones.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_seconds: i64,
    revoked: Arc<TokenBlacklist>,
}

impl TokenService {
    pub fn new(secret: &str, ttl_seconds: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_seconds,
            revoked: Arc::new(TokenBlacklist::new()),
        }
    }

    pub fn issue(&self, user: &User) -> Result<IssuedToken, TokenError> {
        self.issue_with_ttl(user, self.ttl_seconds)
    }

    pub fn issue_with_ttl(&self, user: &User, ttl_seconds: i64) -> Result<IssuedToken, TokenError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            iat: now,
            exp: now + ttl_seconds,
            jti: Uuid::new_v4(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))?;

        Ok(IssuedToken {
            token,
            claims,
            expires_in: ttl_seconds,
        })
    }

    /// Check signature, expiry and revocation, in that order.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let claims = decode::<Claims>(token, &self.decoding, &validation)?.claims;

        if self.revoked.is_revoked(&claims.jti) {
            return Err(TokenError::Revoked);
        }

        Ok(claims)
    }

    pub fn revoke(&self, claims: &Claims) {
        self.revoked.revoke(claims.jti, claims.exp);
        tracing::info!(user_id = %claims.sub, jti = %claims.jti, "Revoked token");
    }
}
