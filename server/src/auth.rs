//! Bearer-token authentication and password hashing. Tokens are HS256
//! JWTs carrying the user id and email; passwords are bcrypt-hashed and
//! never stored or logged in the clear.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::http_server::AppState;

/// Issued tokens expire after this many days.
pub const TOKEN_TTL_DAYS: i64 = 30;

/// JWT claims for an authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub email: String,
    pub exp: i64,
}

/// Encoding/decoding key pair derived from the configured secret.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtKeys {
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    /// Issue a token for a user.
    pub fn issue(&self, user_id: &str, email: &str) -> Result<String, ApiError> {
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            exp: (Utc::now() + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("Failed to issue token: {}", e)))
    }

    /// Verify a token and return its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, ApiError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| ApiError::InvalidToken)
    }
}

pub fn hash_password(password: &str) -> Result<String, ApiError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, ApiError> {
    bcrypt::verify(password, hash)
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("Failed to verify password: {}", e)))
}

/// Identity extracted from a verified bearer token.
///
/// Handlers take this as an argument; a missing token rejects with 401 and
/// an invalid one with 403 before the handler body runs.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
    pub email: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, ApiError> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::MissingToken)?;

        let token = header_value
            .strip_prefix("Bearer ")
            .ok_or(ApiError::MissingToken)?;

        let claims = state.jwt.verify(token)?;
        Ok(AuthUser {
            user_id: claims.sub,
            email: claims.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_and_verify_round_trip() {
        let keys = JwtKeys::from_secret(b"test-secret");
        let token = keys.issue("user-1", "a@example.com").unwrap();

        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.email, "a@example.com");
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let keys = JwtKeys::from_secret(b"test-secret");
        let token = keys.issue("user-1", "a@example.com").unwrap();

        let other = JwtKeys::from_secret(b"other-secret");
        assert!(matches!(other.verify(&token), Err(ApiError::InvalidToken)));
    }

    #[test]
    fn garbage_token_is_rejected() {
        let keys = JwtKeys::from_secret(b"test-secret");
        assert!(matches!(
            keys.verify("not-a-jwt"),
            Err(ApiError::InvalidToken)
        ));
    }

    #[test]
    fn password_hash_round_trip() {
        let hash = hash_password("hunter2").unwrap();
        assert_ne!(hash, "hunter2");
        assert!(verify_password("hunter2", &hash).unwrap());
        assert!(!verify_password("hunter3", &hash).unwrap());
    }
}
