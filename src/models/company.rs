//! Company entity and the per-company cause breakdown.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Company projection read by the platform-wide scan.
///
/// `boycott_count` is maintained by the write path; it is never derived
/// from `user_boycotts` here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub company_id: String,
    pub company_name: String,
    pub boycott_count: i32,
}

/// Denormalized row: how many boycotters of a company cite a given cause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CauseCompanyStat {
    pub company_id: String,
    pub cause_desc: String,
    pub boycott_count: i32,
}

impl Company {
    pub fn new(company_id: &str, company_name: &str, boycott_count: i32) -> Self {
        Self {
            company_id: company_id.to_string(),
            company_name: company_name.to_string(),
            boycott_count,
        }
    }
}

impl CauseCompanyStat {
    pub fn new(company_id: &str, cause_desc: &str, boycott_count: i32) -> Self {
        Self {
            company_id: company_id.to_string(),
            cause_desc: cause_desc.to_string(),
            boycott_count,
        }
    }
}
