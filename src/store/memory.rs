//! In-process store over plain vectors, used for tests and local fixtures.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{StatsStore, StoreError};
use crate::models::boycott::{UserBoycott, UserCauseFollow};
use crate::models::cause::Cause;
use crate::models::company::{CauseCompanyStat, Company};

/// Vector-backed store. Read order is insertion order.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    boycotts: Vec<UserBoycott>,
    follows: Vec<UserCauseFollow>,
    companies: Vec<Company>,
    cause_company_stats: Vec<CauseCompanyStat>,
    causes: Vec<Cause>,
    queries: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_boycott(mut self, user_id: &str, company_id: &str) -> Self {
        self.boycotts.push(UserBoycott::new(user_id, company_id));
        self
    }

    pub fn with_follow(mut self, user_id: &str, cause_id: &str) -> Self {
        self.follows.push(UserCauseFollow::new(user_id, cause_id));
        self
    }

    pub fn with_company(mut self, company: Company) -> Self {
        self.companies.push(company);
        self
    }

    pub fn with_cause_company_stat(mut self, stat: CauseCompanyStat) -> Self {
        self.cause_company_stats.push(stat);
        self
    }

    pub fn with_cause(mut self, cause: Cause) -> Self {
        self.causes.push(cause);
        self
    }

    /// Number of data queries served so far (`ping` is not counted).
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn record_query(&self) {
        self.queries.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl StatsStore for InMemoryStore {
    async fn user_boycotts(&self, user_id: &str) -> Result<Vec<UserBoycott>, StoreError> {
        self.record_query();
        Ok(self
            .boycotts
            .iter()
            .filter(|row| row.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn user_cause_follows(&self, user_id: &str) -> Result<Vec<UserCauseFollow>, StoreError> {
        self.record_query();
        Ok(self
            .follows
            .iter()
            .filter(|row| row.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn companies(&self) -> Result<Vec<Company>, StoreError> {
        self.record_query();
        Ok(self.companies.clone())
    }

    async fn top_cause_company_stat(
        &self,
        company_id: &str,
    ) -> Result<Option<CauseCompanyStat>, StoreError> {
        self.record_query();
        // Stable sort keeps insertion order among equal counts.
        let mut rows: Vec<&CauseCompanyStat> = self
            .cause_company_stats
            .iter()
            .filter(|row| row.company_id == company_id)
            .collect();
        rows.sort_by(|a, b| b.boycott_count.cmp(&a.boycott_count));
        Ok(rows.first().map(|row| (*row).clone()))
    }

    async fn causes(&self) -> Result<Vec<Cause>, StoreError> {
        self.record_query();
        Ok(self.causes.clone())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
