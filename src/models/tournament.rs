//! TournamentFormat, the generation request, and FixtureError.

use crate::models::fixture::TournamentId;
use crate::models::participant::Participant;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Placeholder venue written into every generated match.
pub const DEFAULT_VENUE: &str = "Por definir";

/// Errors that can occur while validating or generating fixtures.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum FixtureError {
    /// Participant set or request does not satisfy the format's rules. Message is user-facing.
    #[error("{0}")]
    Validation(String),
    /// The generator produced an inconsistent structure. Never reachable with valid input.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
    /// Tournament type code outside 0..=2.
    #[error("Unknown tournament type {0}")]
    UnknownFormat(u64),
}

/// Tournament format. Adding a format means one variant here and one arm per match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentFormat {
    /// Single round-robin.
    League,
    /// Single elimination.
    Elimination,
    /// Round-robin groups, then single elimination.
    GroupsAndElimination,
}

impl TournamentFormat {
    pub const ALL: [TournamentFormat; 3] = [
        TournamentFormat::League,
        TournamentFormat::Elimination,
        TournamentFormat::GroupsAndElimination,
    ];

    pub fn from_code(code: u8) -> Result<Self, FixtureError> {
        match code {
            0 => Ok(TournamentFormat::League),
            1 => Ok(TournamentFormat::Elimination),
            2 => Ok(TournamentFormat::GroupsAndElimination),
            other => Err(FixtureError::UnknownFormat(other.into())),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            TournamentFormat::League => 0,
            TournamentFormat::Elimination => 1,
            TournamentFormat::GroupsAndElimination => 2,
        }
    }

    /// Name used in response messages.
    pub fn name(self) -> &'static str {
        match self {
            TournamentFormat::League => "Liga",
            TournamentFormat::Elimination => "Eliminación directa",
            TournamentFormat::GroupsAndElimination => "Grupos + Eliminación",
        }
    }
}

impl FromStr for TournamentFormat {
    type Err = FixtureError;

    /// Accepts the numeric code or the snake_case variant name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            let code = s.parse::<u64>().unwrap_or(u64::MAX);
            return u8::try_from(code)
                .map_err(|_| FixtureError::UnknownFormat(code))
                .and_then(Self::from_code);
        }
        match s {
            "league" => Ok(TournamentFormat::League),
            "elimination" => Ok(TournamentFormat::Elimination),
            "groups_and_elimination" => Ok(TournamentFormat::GroupsAndElimination),
            _ => Err(FixtureError::Validation(format!("Unknown tournament type '{}'", s))),
        }
    }
}

/// Input of one generation call.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub tournament_id: TournamentId,
    /// Ordered; position is the seed.
    pub participants: Vec<Participant>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Venue written into every match; `DEFAULT_VENUE` when absent.
    #[serde(default)]
    pub venue: Option<String>,
}

impl GenerationRequest {
    pub fn new(
        tournament_id: TournamentId,
        participants: Vec<Participant>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            tournament_id,
            participants,
            start_date,
            end_date,
            venue: None,
        }
    }

    pub fn venue(&self) -> &str {
        self.venue.as_deref().unwrap_or(DEFAULT_VENUE)
    }
}
