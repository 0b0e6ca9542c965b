//! Cause entity.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Cause projection read by the platform-wide scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Cause {
    pub cause_id: String,
    pub category: String,
    pub cause_desc: String,
    pub follower_count: i32,
}

impl Cause {
    pub fn new(cause_id: &str, category: &str, cause_desc: &str, follower_count: i32) -> Self {
        Self {
            cause_id: cause_id.to_string(),
            category: category.to_string(),
            cause_desc: cause_desc.to_string(),
            follower_count,
        }
    }
}
