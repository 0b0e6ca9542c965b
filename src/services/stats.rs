//! Per-user boycott statistics: user counts plus platform-wide winners.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::cause::Cause;
use crate::models::company::Company;
use crate::services::ranking::first_max_by_key;
use crate::store::{StatsStore, StoreError};

/// Cause name shown when no cause has any follower (or no cause exists).
pub const NO_CAUSES_YET: &str = "no causes yet";

/// Company name shown when the platform has no companies.
pub const NO_COMPANIES_YET: &str = "no companies yet";

/// Reason shown when a company has no cause breakdown.
pub const NO_REASON: &str = "N/A";

/// Statistics returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub total_boycotts: i64,
    pub causes_followed: i64,
    pub worst_company_name: String,
    pub worst_company_boycott_count: i64,
    pub top_reason_for_worst_company: String,
    pub top_cause_name: String,
    pub top_cause_follower_count: i64,
}

/// Lookup stage, carried into failure logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsStep {
    UserBoycotts,
    UserCauses,
    WorstCompany,
    TopReason,
    TopCause,
}

impl StatsStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatsStep::UserBoycotts => "user_boycotts",
            StatsStep::UserCauses => "user_causes",
            StatsStep::WorstCompany => "worst_company",
            StatsStep::TopReason => "top_reason",
            StatsStep::TopCause => "top_cause",
        }
    }
}

impl fmt::Display for StatsStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compute the stats for `user_id`, or `Unauthorized` when it is absent.
///
/// All lookups run concurrently except the top reason, which waits on the
/// worst company. The first failure aborts; nothing partial is returned.
pub async fn get_user_stats(
    store: &dyn StatsStore,
    user_id: Option<&str>,
) -> Result<UserStats, AppError> {
    let Some(user_id) = user_id.filter(|id| !id.is_empty()) else {
        tracing::warn!("User stats requested without a caller identity");
        return Err(AppError::Unauthorized);
    };

    let (total_boycotts, causes_followed, worst, top_cause) = tokio::try_join!(
        async {
            count_user_boycotts(store, user_id)
                .await
                .map_err(|e| step_failed(StatsStep::UserBoycotts, user_id, e))
        },
        async {
            count_user_causes(store, user_id)
                .await
                .map_err(|e| step_failed(StatsStep::UserCauses, user_id, e))
        },
        worst_company_with_reason(store, user_id),
        async {
            find_top_cause(store)
                .await
                .map_err(|e| step_failed(StatsStep::TopCause, user_id, e))
        },
    )?;

    let stats = build_stats(total_boycotts, causes_followed, worst, top_cause);
    tracing::debug!(
        user_id = %user_id,
        total_boycotts = stats.total_boycotts,
        causes_followed = stats.causes_followed,
        "Computed user stats"
    );
    Ok(stats)
}

/// Count the distinct companies a user boycotts.
pub async fn count_user_boycotts(store: &dyn StatsStore, user_id: &str) -> Result<i64, StoreError> {
    let rows = store.user_boycotts(user_id).await?;
    let distinct: HashSet<&str> = rows.iter().map(|row| row.company_id.as_str()).collect();
    Ok(distinct.len() as i64)
}

/// Count the causes a user follows (one row per followed cause).
pub async fn count_user_causes(store: &dyn StatsStore, user_id: &str) -> Result<i64, StoreError> {
    let rows = store.user_cause_follows(user_id).await?;
    Ok(rows.len() as i64)
}

/// The most-boycotted company on the platform; `None` when there are none.
pub async fn find_worst_company(store: &dyn StatsStore) -> Result<Option<Company>, StoreError> {
    let companies = store.companies().await?;
    Ok(first_max_by_key(companies, |c| c.boycott_count))
}

/// The cause most cited by boycotters of `company_id`, or `"N/A"`.
pub async fn find_top_reason(store: &dyn StatsStore, company_id: &str) -> Result<String, StoreError> {
    let top = store.top_cause_company_stat(company_id).await?;
    Ok(top
        .map(|stat| stat.cause_desc)
        .unwrap_or_else(|| NO_REASON.to_string()))
}

/// The most-followed cause on the platform; `None` when there are none.
pub async fn find_top_cause(store: &dyn StatsStore) -> Result<Option<Cause>, StoreError> {
    let causes = store.causes().await?;
    Ok(first_max_by_key(causes, |c| c.follower_count))
}

/// Assemble the response, substituting placeholders for missing winners.
pub fn build_stats(
    total_boycotts: i64,
    causes_followed: i64,
    worst: Option<(Company, String)>,
    top_cause: Option<Cause>,
) -> UserStats {
    let (worst_company_name, worst_company_boycott_count, top_reason_for_worst_company) =
        match worst {
            Some((company, reason)) => (
                company.company_name,
                i64::from(company.boycott_count),
                reason,
            ),
            None => (NO_COMPANIES_YET.to_string(), 0, NO_REASON.to_string()),
        };

    let (top_cause_name, top_cause_follower_count) = match top_cause {
        Some(cause) if cause.follower_count != 0 => {
            (cause.cause_desc, i64::from(cause.follower_count))
        }
        Some(cause) => (NO_CAUSES_YET.to_string(), i64::from(cause.follower_count)),
        None => (NO_CAUSES_YET.to_string(), 0),
    };

    UserStats {
        total_boycotts,
        causes_followed,
        worst_company_name,
        worst_company_boycott_count,
        top_reason_for_worst_company,
        top_cause_name,
        top_cause_follower_count,
    }
}

/// Worst company and its top reason; the reason lookup needs the company id.
async fn worst_company_with_reason(
    store: &dyn StatsStore,
    user_id: &str,
) -> Result<Option<(Company, String)>, AppError> {
    let worst = find_worst_company(store)
        .await
        .map_err(|e| step_failed(StatsStep::WorstCompany, user_id, e))?;
    let Some(company) = worst else {
        return Ok(None);
    };
    let reason = find_top_reason(store, &company.company_id)
        .await
        .map_err(|e| step_failed(StatsStep::TopReason, user_id, e))?;
    Ok(Some((company, reason)))
}

fn step_failed(step: StatsStep, user_id: &str, err: StoreError) -> AppError {
    tracing::error!(user_id = %user_id, step = %step, error = %err, "User stats lookup failed");
    AppError::Store(err)
}
