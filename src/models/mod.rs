//! Read models for the boycott platform entities.

pub mod boycott;
pub mod cause;
pub mod company;
