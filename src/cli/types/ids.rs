//! ID types for the Summer League backend.
//!
//! The backend hands out opaque string identifiers, so each wrapper keeps a
//! `String` and exists only to stop a team id from being passed where a player
//! id is expected.

use crate::error::{LeagueError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = LeagueError;

            fn from_str(s: &str) -> Result<Self> {
                Ok(Self(s.trim().to_string()))
            }
        }
    };
}

string_id!(
    /// Type-safe wrapper for team IDs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use summer_league::TeamId;
    ///
    /// let team = TeamId::new("team-42");
    /// assert_eq!(team.as_str(), "team-42");
    /// assert_eq!(team.to_string(), "team-42");
    /// ```
    TeamId
);

string_id!(
    /// Type-safe wrapper for player IDs
    PlayerId
);

string_id!(
    /// Game (schedule entry) being scored
    ScheduleId
);

string_id!(UserId);
