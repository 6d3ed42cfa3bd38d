//! Type-safe wrappers and enums for league data.

pub mod ids;
pub mod stat;
