//! User relationship rows: boycotts and cause follows.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One (user, company) boycott relationship. A user who boycotts a company
/// for several causes has one row per cause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserBoycott {
    pub user_id: String,
    pub company_id: String,
}

/// One (user, cause) follow relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserCauseFollow {
    pub user_id: String,
    pub cause_id: String,
}

impl UserBoycott {
    pub fn new(user_id: &str, company_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            company_id: company_id.to_string(),
        }
    }
}

impl UserCauseFollow {
    pub fn new(user_id: &str, cause_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            cause_id: cause_id.to_string(),
        }
    }
}
