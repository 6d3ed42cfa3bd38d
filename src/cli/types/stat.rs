//! Basketball stat kinds tracked by the scorekeeper.

use crate::error::LeagueError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One countable basketball event.
///
/// Only the three shooting kinds carry a point weight; every other kind is a
/// plain counter that never moves the score.
///
/// # Examples
///
/// ```rust
/// use summer_league::StatKind;
///
/// assert_eq!(StatKind::ThreePoints.weight(), 3);
/// assert_eq!(StatKind::Assist.weight(), 0);
/// assert_eq!("3pt".parse::<StatKind>().unwrap(), StatKind::ThreePoints);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatKind {
    ThreePoints,
    TwoPoints,
    FreeThrow,
    Assist,
    Rebound,
    Turnover,
    Block,
    Steal,
    Foul,
}

impl StatKind {
    /// Every kind, in display and payload order.
    pub const ALL: [StatKind; 9] = [
        StatKind::ThreePoints,
        StatKind::TwoPoints,
        StatKind::FreeThrow,
        StatKind::Assist,
        StatKind::Rebound,
        StatKind::Turnover,
        StatKind::Block,
        StatKind::Steal,
        StatKind::Foul,
    ];

    /// Points contributed to the team score by one occurrence.
    pub fn weight(&self) -> u32 {
        match self {
            StatKind::ThreePoints => 3,
            StatKind::TwoPoints => 2,
            StatKind::FreeThrow => 1,
            _ => 0,
        }
    }

    /// Position of this kind inside `ALL`.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Field name the stats endpoint expects for this kind.
    pub fn field_name(&self) -> &'static str {
        match self {
            StatKind::ThreePoints => "threePoints",
            StatKind::TwoPoints => "twoPoints",
            StatKind::FreeThrow => "freeThrow",
            StatKind::Assist => "assist",
            StatKind::Rebound => "rebound",
            StatKind::Turnover => "turnover",
            StatKind::Block => "block",
            StatKind::Steal => "steal",
            StatKind::Foul => "foul",
        }
    }

    /// Short scoreboard label.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            StatKind::ThreePoints => "3PT",
            StatKind::TwoPoints => "2PT",
            StatKind::FreeThrow => "FT",
            StatKind::Assist => "AST",
            StatKind::Rebound => "REB",
            StatKind::Turnover => "TO",
            StatKind::Block => "BLK",
            StatKind::Steal => "STL",
            StatKind::Foul => "PF",
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl FromStr for StatKind {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "3pt" | "3" | "three-points" | "threepoints" => Ok(StatKind::ThreePoints),
            "2pt" | "2" | "two-points" | "twopoints" => Ok(StatKind::TwoPoints),
            "ft" | "1" | "free-throw" | "freethrow" => Ok(StatKind::FreeThrow),
            "ast" | "assist" => Ok(StatKind::Assist),
            "reb" | "rebound" => Ok(StatKind::Rebound),
            "to" | "turnover" => Ok(StatKind::Turnover),
            "blk" | "block" => Ok(StatKind::Block),
            "stl" | "steal" => Ok(StatKind::Steal),
            "pf" | "foul" => Ok(StatKind::Foul),
            _ => Err(LeagueError::UnknownStat {
                stat: s.to_string(),
            }),
        }
    }
}

/// Whether a stat event adds or removes one occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increment,
    Decrement,
}
