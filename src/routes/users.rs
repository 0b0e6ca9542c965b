//! User routes: per-user boycott statistics.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::errors::AppError;
use crate::middleware::auth::CallerIdentity;
use crate::services::stats as stats_service;
use crate::AppState;

/// GET /api/v1/users/stats — boycott statistics for the caller.
pub async fn stats(
    State(state): State<AppState>,
    CallerIdentity(user_id): CallerIdentity,
) -> Result<Response, AppError> {
    let stats = stats_service::get_user_stats(state.store.as_ref(), user_id.as_deref()).await?;
    let body = serde_json::to_vec(&stats)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
