use axum::{async_trait, extract::FromRequestParts, http::request::Parts, RequestPartsExt};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::UserIdentity;
use crate::AppState;

// =============================================================================
// Passwords
// =============================================================================

/// Hash a password with a salted bcrypt hash
///
/// bcrypt is deliberately slow, so the work runs on the blocking pool.
pub async fn hash_password(password: String, cost: u32) -> Result<String> {
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
    Ok(hash)
}

/// Check a password against a stored bcrypt hash
pub async fn verify_password(password: String, hash: String) -> Result<bool> {
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
    Ok(matches)
}

// =============================================================================
// Session tokens
// =============================================================================

/// The contents of a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiry (Unix timestamp)
    pub exp: i64,
}

/// Signing material for HS256 session tokens
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: i64,
}

impl TokenKeys {
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }

    /// Issue a signed token for the given identity
    pub fn issue(&self, identity: &UserIdentity) -> Result<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            id: identity.id,
            name: identity.name.clone(),
            email: identity.email.clone(),
            iat: now,
            exp: now.saturating_add(self.ttl_secs),
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(AppError::TokenCreation)
    }

    /// Verify signature and expiry, returning the embedded claims
    pub fn verify(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("Rejected token: {}", e);
                AppError::InvalidToken
            })
    }
}

/// Identity of the caller, resolved from the `Authorization: Bearer` header
///
/// Adding this extractor to a handler makes the route require a valid token.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser(pub UserIdentity);

impl AuthUser {
    pub fn id(&self) -> i64 {
        self.0.id
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| AppError::MissingToken)?;

        let claims = state.tokens.verify(bearer.token())?;

        Ok(AuthUser(UserIdentity {
            id: claims.id,
            name: claims.name,
            email: claims.email,
        }))
    }
}
