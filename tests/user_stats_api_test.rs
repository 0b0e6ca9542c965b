//! Router-level tests for the stats endpoint against an in-memory store.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use boycott_stats::config::AppConfig;
use boycott_stats::models::boycott::{UserBoycott, UserCauseFollow};
use boycott_stats::models::cause::Cause;
use boycott_stats::models::company::{CauseCompanyStat, Company};
use boycott_stats::routes;
use boycott_stats::services::auth::issue_token;
use boycott_stats::store::{InMemoryStore, StatsStore, StoreError};
use boycott_stats::AppState;

const SECRET: &str = "test-jwt-secret-for-router-tests-only";
const STATS_URI: &str = "/api/v1/users/stats";

fn config() -> AppConfig {
    AppConfig {
        database_url: "postgres://unused".to_string(),
        database_max_connections: 1,
        host: "127.0.0.1".to_string(),
        port: 0,
        jwt_secret: SECRET.to_string(),
        frontend_url: "http://localhost:5173".to_string(),
    }
}

fn app(store: Arc<dyn StatsStore>) -> Router {
    routes::router(AppState {
        store,
        config: config(),
    })
}

fn bearer(sub: &str) -> String {
    format!("Bearer {}", issue_token(sub, SECRET, 900).expect("token"))
}

async fn get(app: Router, uri: &str, auth: Option<&str>) -> (StatusCode, Option<String>, Value) {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    let request = builder.body(Body::empty()).expect("request");
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let payload = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, content_type, payload)
}

fn platform() -> InMemoryStore {
    InMemoryStore::new()
        .with_boycott("user-123", "c1")
        .with_boycott("user-123", "c2")
        .with_follow("user-123", "cause1")
        .with_follow("user-123", "cause2")
        .with_company(Company::new("worstCo", "Worst Co", 15))
        .with_cause_company_stat(CauseCompanyStat::new("worstCo", "Labor", 7))
        .with_cause(Cause::new("causeA", "category", "Environment", 99))
}

/// Store whose backend is unreachable for every data query.
struct DownStore;

#[async_trait]
impl StatsStore for DownStore {
    async fn user_boycotts(&self, _user_id: &str) -> Result<Vec<UserBoycott>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn user_cause_follows(&self, _user_id: &str) -> Result<Vec<UserCauseFollow>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn companies(&self) -> Result<Vec<Company>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn top_cause_company_stat(
        &self,
        _company_id: &str,
    ) -> Result<Option<CauseCompanyStat>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn causes(&self) -> Result<Vec<Cause>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

#[tokio::test]
async fn stats_for_authenticated_user() {
    let auth = bearer("user-123");
    let (status, content_type, body) = get(app(Arc::new(platform())), STATS_URI, Some(&auth)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(body["total_boycotts"], 2);
    assert_eq!(body["causes_followed"], 2);
    assert_eq!(body["worst_company_name"], "Worst Co");
    assert_eq!(body["worst_company_boycott_count"], 15);
    assert_eq!(body["top_reason_for_worst_company"], "Labor");
    assert_eq!(body["top_cause_name"], "Environment");
    assert_eq!(body["top_cause_follower_count"], 99);
}

#[tokio::test]
async fn missing_token_is_401_and_store_untouched() {
    let store = Arc::new(platform());
    let (status, _, body) = get(app(store.clone()), STATS_URI, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Unauthorized");
    assert_eq!(store.query_count(), 0);
}

#[tokio::test]
async fn invalid_or_expired_token_is_401() {
    let store = Arc::new(platform());
    let expired = format!(
        "Bearer {}",
        issue_token("user-123", SECRET, -3600).expect("token")
    );
    let foreign = format!(
        "Bearer {}",
        issue_token("user-123", "another-secret", 900).expect("token")
    );

    for auth in ["Bearer garbage", expired.as_str(), foreign.as_str()] {
        let (status, _, _) = get(app(store.clone()), STATS_URI, Some(auth)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
    assert_eq!(store.query_count(), 0);
}

#[tokio::test]
async fn empty_platform_is_well_defined() {
    let auth = bearer("newcomer");
    let (status, _, body) = get(app(Arc::new(InMemoryStore::new())), STATS_URI, Some(&auth)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_boycotts"], 0);
    assert_eq!(body["causes_followed"], 0);
    assert_eq!(body["worst_company_name"], "no companies yet");
    assert_eq!(body["worst_company_boycott_count"], 0);
    assert_eq!(body["top_reason_for_worst_company"], "N/A");
    assert_eq!(body["top_cause_name"], "no causes yet");
    assert_eq!(body["top_cause_follower_count"], 0);
}

#[tokio::test]
async fn store_failure_is_500_with_message() {
    let auth = bearer("user-123");
    let (status, _, body) = get(app(Arc::new(DownStore)), STATS_URI, Some(&auth)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = body["error"].as_str().expect("error message");
    assert!(message.starts_with("Unexpected server error"));
    assert!(message.contains("connection refused"));
}

#[tokio::test]
async fn same_state_same_response() {
    let store: Arc<dyn StatsStore> = Arc::new(platform());
    let auth = bearer("user-123");
    let (_, _, first) = get(app(store.clone()), STATS_URI, Some(&auth)).await;
    let (_, _, second) = get(app(store), STATS_URI, Some(&auth)).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn health_probes() {
    let (status, _, _) = get(app(Arc::new(InMemoryStore::new())), "/health/live", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _, body) = get(app(Arc::new(InMemoryStore::new())), "/health/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["store"], "connected");

    let (_, _, body) = get(app(Arc::new(DownStore)), "/health/ready", None).await;
    assert!(body["store"].as_str().unwrap().starts_with("error:"));
}
