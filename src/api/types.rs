use crate::cli::types::stat::StatKind;
use crate::session::{PlayerStatRecord, StatSession};
use crate::{PlayerId, ScheduleId, TeamId, UserId};
use serde::{de::Error, Deserialize, Deserializer, Serialize};


/// Jersey numbers arrive as either strings or integers depending on who
/// entered the player.
fn de_jersey_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    match Raw::deserialize(deserializer) {
        Ok(Raw::Text(s)) => Ok(s.trim().to_string()),
        Ok(Raw::Number(n)) => Ok(n.to_string()),
        Err(_) => Err(D::Error::custom("jersey number must be a string or integer")),
    }
}

/// A rostered player as returned by the players endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlayerIdentity {
    #[serde(alias = "_id")]
    pub id: PlayerId,
    #[serde(deserialize_with = "de_jersey_number")]
    pub number: String,
}

/// One player's line in a stats submission.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatLine {
    pub player: PlayerId,
    pub three_points: u32,
    pub two_points: u32,
    pub free_throw: u32,
    pub assist: u32,
    pub rebound: u32,
    pub turnover: u32,
    pub block: u32,
    pub steal: u32,
    pub foul: u32,
}

impl PlayerStatLine {
    pub fn from_record(player: PlayerId, record: &PlayerStatRecord) -> Self {
        Self {
            player,
            three_points: record.get(StatKind::ThreePoints),
            two_points: record.get(StatKind::TwoPoints),
            free_throw: record.get(StatKind::FreeThrow),
            assist: record.get(StatKind::Assist),
            rebound: record.get(StatKind::Rebound),
            turnover: record.get(StatKind::Turnover),
            block: record.get(StatKind::Block),
            steal: record.get(StatKind::Steal),
            foul: record.get(StatKind::Foul),
        }
    }
}

/// Body of `POST /stats`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StatsSubmission {
    pub team: TeamId,
    pub scorer: UserId,
    pub schedule: ScheduleId,
    pub players: Vec<PlayerStatLine>,
}

impl StatsSubmission {
    /// Translate a finished session, one line per roster player in roster order.
    pub fn from_session(session: &StatSession, scorer: UserId, schedule: ScheduleId) -> Self {
        let players = session
            .roster()
            .iter()
            .map(|p| {
                let record = session.record(&p.id).copied().unwrap_or_default();
                PlayerStatLine::from_record(p.id.clone(), &record)
            })
            .collect();

        Self {
            team: session.team_id().clone(),
            scorer,
            schedule,
            players,
        }
    }
}
