//! Bearer token verification: resolves a caller identity from a JWT.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// JWT claims carried by caller tokens. `sub` is the user identity.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

/// Mint an HS256 token for `sub`. Used by the dev seeder and tests.
pub fn issue_token(sub: &str, jwt_secret: &str, expiry_secs: i64) -> Result<String, AppError> {
    let now = Utc::now();
    let claims = Claims {
        sub: sub.to_string(),
        exp: (now + Duration::seconds(expiry_secs)).timestamp(),
        iat: now.timestamp(),
    };
    let encoding_key = EncodingKey::from_secret(jwt_secret.as_bytes());

    jsonwebtoken::encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| AppError::Internal(format!("Token generation failed: {e}")))
}

/// Validate a JWT and return the claims.
pub fn validate_token(token: &str, jwt_secret: &str) -> Result<Claims, AppError> {
    let decoding_key = DecodingKey::from_secret(jwt_secret.as_bytes());
    let validation = Validation::default();

    jsonwebtoken::decode::<Claims>(token, &decoding_key, &validation)
        .map(|data| data.claims)
        .map_err(|_| AppError::Unauthorized)
}

/// Resolve the caller identity from a raw `Authorization` header value.
///
/// Returns `None` for anything that does not carry a valid token with a
/// non-empty subject.
pub fn identity_from_header(header: Option<&str>, jwt_secret: &str) -> Option<String> {
    let token = header?.strip_prefix("Bearer ")?;
    let claims = validate_token(token, jwt_secret).ok()?;
    if claims.sub.is_empty() {
        return None;
    }
    Some(claims.sub)
}
