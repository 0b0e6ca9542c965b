//! Business logic services.

pub mod auth;
pub mod ranking;
pub mod stats;
