//! Summer League backend boundary: roster lookup and stats submission.

pub mod http;
pub mod types;

pub use types::{PlayerIdentity, PlayerStatLine, StatsSubmission};
