//! PostgreSQL-backed store. All SQL is runtime-checked (`sqlx::query_as`).

use async_trait::async_trait;
use sqlx::PgPool;

use super::{StatsStore, StoreError};
use crate::models::boycott::{UserBoycott, UserCauseFollow};
use crate::models::cause::Cause;
use crate::models::company::{CauseCompanyStat, Company};

/// Store backed by a shared `PgPool`.
#[derive(Debug, Clone)]
pub struct PgStatsStore {
    pool: PgPool,
}

impl PgStatsStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsStore for PgStatsStore {
    async fn user_boycotts(&self, user_id: &str) -> Result<Vec<UserBoycott>, StoreError> {
        let rows = sqlx::query_as::<_, UserBoycott>(
            "SELECT user_id, company_id FROM user_boycotts WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn user_cause_follows(&self, user_id: &str) -> Result<Vec<UserCauseFollow>, StoreError> {
        let rows = sqlx::query_as::<_, UserCauseFollow>(
            "SELECT user_id, cause_id FROM user_causes WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn companies(&self) -> Result<Vec<Company>, StoreError> {
        // Deliberately unordered: the winner is reduced in the service.
        let rows = sqlx::query_as::<_, Company>(
            r#"
            SELECT company_id, company_name, boycott_count
            FROM companies
            WHERE boycott_count IS NOT NULL
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn top_cause_company_stat(
        &self,
        company_id: &str,
    ) -> Result<Option<CauseCompanyStat>, StoreError> {
        let row = sqlx::query_as::<_, CauseCompanyStat>(
            r#"
            SELECT company_id, cause_desc, boycott_count
            FROM cause_company_stats
            WHERE company_id = $1 AND boycott_count IS NOT NULL
            ORDER BY boycott_count DESC
            LIMIT 1
            "#,
        )
        .bind(company_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn causes(&self) -> Result<Vec<Cause>, StoreError> {
        let rows = sqlx::query_as::<_, Cause>(
            r#"
            SELECT cause_id, category, cause_desc, follower_count
            FROM causes
            WHERE follower_count IS NOT NULL
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
