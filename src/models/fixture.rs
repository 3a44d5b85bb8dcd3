//! Fixture (a named round of matches) and FixtureKind.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier of a tournament (database id, opaque here).
pub type TournamentId = i64;

/// Phase a fixture belongs to. Serialized as its numeric code.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum FixtureKind {
    /// One round of a league (code 0).
    LeagueRound,
    /// One round of an elimination bracket (code 1).
    EliminationRound,
    /// One round of a group's round robin (code 2).
    GroupRound,
}

impl FixtureKind {
    /// Numeric code stored by the persistence layer.
    pub fn code(self) -> u8 {
        match self {
            FixtureKind::LeagueRound => 0,
            FixtureKind::EliminationRound => 1,
            FixtureKind::GroupRound => 2,
        }
    }
}

impl From<FixtureKind> for u8 {
    fn from(kind: FixtureKind) -> Self {
        kind.code()
    }
}

impl TryFrom<u8> for FixtureKind {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(FixtureKind::LeagueRound),
            1 => Ok(FixtureKind::EliminationRound),
            2 => Ok(FixtureKind::GroupRound),
            other => Err(format!("unknown fixture kind {}", other)),
        }
    }
}

/// A named grouping of matches sharing one round of one phase.
/// Matches point at fixtures through their position in `GenerationResult::fixtures`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub kind: FixtureKind,
    pub tournament_id: TournamentId,
    pub name: String,
    /// 1-based, contiguous within a phase.
    pub round_number: u32,
    /// Group label ("A", "B", ...) for group-stage rounds.
    pub group: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
