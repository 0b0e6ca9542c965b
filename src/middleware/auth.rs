//! Caller identity extractor for Axum handlers.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::services::auth as auth_service;
use crate::AppState;

/// Caller identity resolved from the `Authorization: Bearer` token.
///
/// Never rejects: an absent, malformed or expired token yields `None`, and
/// the handler decides how to respond.
/// ```ignore
/// async fn handler(CallerIdentity(user_id): CallerIdentity) -> impl IntoResponse { ... }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity(pub Option<String>);

impl FromRequestParts<AppState> for CallerIdentity {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        Ok(CallerIdentity(auth_service::identity_from_header(
            auth_header,
            &state.config.jwt_secret,
        )))
    }
}
