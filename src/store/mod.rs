//! Read-only store capability consumed by the stats service.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::models::boycott::{UserBoycott, UserCauseFollow};
use crate::models::cause::Cause;
use crate::models::company::{CauseCompanyStat, Company};

pub use memory::InMemoryStore;
pub use postgres::PgStatsStore;

/// Failure raised by a store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Queries the stats service issues against the platform data.
///
/// Implementations must be safe for concurrent reads; every method is a
/// pure read.
#[async_trait]
pub trait StatsStore: Send + Sync {
    /// All boycott rows for a user (exact match on user id).
    async fn user_boycotts(&self, user_id: &str) -> Result<Vec<UserBoycott>, StoreError>;

    /// All cause follow rows for a user (exact match on user id).
    async fn user_cause_follows(&self, user_id: &str) -> Result<Vec<UserCauseFollow>, StoreError>;

    /// Full read of every company carrying a boycott count, in store read order.
    async fn companies(&self) -> Result<Vec<Company>, StoreError>;

    /// Highest-count cause stat row for a company, if any.
    async fn top_cause_company_stat(
        &self,
        company_id: &str,
    ) -> Result<Option<CauseCompanyStat>, StoreError>;

    /// Full read of every cause carrying a follower count, in store read order.
    async fn causes(&self) -> Result<Vec<Cause>, StoreError>;

    /// Connectivity probe for readiness checks.
    async fn ping(&self) -> Result<(), StoreError>;
}
