//! Match, Slot, MatchState, and the slot-progression link between rounds.

use crate::models::fixture::TournamentId;
use crate::models::participant::ParticipantId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Identifier of a referee. Always `None` at generation time.
pub type RefereeId = i64;

/// Which participant slot of a match.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// First participant slot (home side; the better seed in round 1).
    #[default]
    A,
    /// Second participant slot.
    B,
}

impl Slot {
    /// Slot in the next round fed by the match at `index` of the current round.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Slot::A
        } else {
            Slot::B
        }
    }
}

/// Lifecycle of a match, serialized as its numeric code.
/// Generation only produces `Scheduled` and `Walkover`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum MatchState {
    /// Not played yet (code 0).
    #[default]
    Scheduled,
    /// Being played (code 1).
    InProgress,
    /// Played; the winner is held by result recording (code 2).
    Finished,
    /// Decided without play: the only present participant is the winner (code 3).
    Walkover,
}

impl MatchState {
    /// Numeric code stored by the persistence layer.
    pub fn code(self) -> u8 {
        match self {
            MatchState::Scheduled => 0,
            MatchState::InProgress => 1,
            MatchState::Finished => 2,
            MatchState::Walkover => 3,
        }
    }
}

impl From<MatchState> for u8 {
    fn from(state: MatchState) -> Self {
        state.code()
    }
}

impl TryFrom<u8> for MatchState {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(MatchState::Scheduled),
            1 => Ok(MatchState::InProgress),
            2 => Ok(MatchState::Finished),
            3 => Ok(MatchState::Walkover),
            other => Err(format!("unknown match state {}", other)),
        }
    }
}

/// A single contest between two participant slots.
///
/// `None` in a slot means TBD (fed by an earlier match or a group standing) or,
/// for a `Walkover`, the bye.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub tournament_id: TournamentId,
    /// Index into `GenerationResult::fixtures`; the caller swaps it for the real id.
    pub fixture_ref: usize,
    pub participant_a: Option<ParticipantId>,
    pub participant_b: Option<ParticipantId>,
    pub date_time: NaiveDateTime,
    pub venue: String,
    pub state: MatchState,
    pub referee_id: Option<RefereeId>,
}

impl Match {
    pub fn participant(&self, slot: Slot) -> Option<ParticipantId> {
        match slot {
            Slot::A => self.participant_a,
            Slot::B => self.participant_b,
        }
    }

    pub fn both_known(&self) -> bool {
        self.participant_a.is_some() && self.participant_b.is_some()
    }

    /// Winner implied by a walkover, if any.
    pub fn walkover_winner(&self) -> Option<ParticipantId> {
        if self.state != MatchState::Walkover {
            return None;
        }
        self.participant_a.or(self.participant_b)
    }

    /// Flags the bracket view needs. `recorded_winner` is the result written by
    /// result recording for finished matches; walkovers carry their own winner.
    pub fn bracket_view(&self, recorded_winner: Option<ParticipantId>) -> BracketMatchView {
        let winner = match self.state {
            MatchState::Walkover => self.walkover_winner(),
            MatchState::Finished => recorded_winner,
            MatchState::Scheduled | MatchState::InProgress => None,
        };
        BracketMatchView {
            has_result: winner.is_some(),
            winner,
            both_known: self.both_known(),
        }
    }
}

/// What a bracket renderer shows for one match.
///
/// TBD: no result, not both known. Bye: result without both known. Decided: result and both known.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketMatchView {
    pub has_result: bool,
    pub winner: Option<ParticipantId>,
    pub both_known: bool,
}

/// Where the winner of an elimination match goes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct SlotLink {
    /// 1-based round of the source match within its elimination phase.
    pub round: u32,
    /// 0-based position of the source match within its round.
    pub index: usize,
    pub next_round: u32,
    pub next_index: usize,
    pub slot: Slot,
    /// Index into `GenerationResult::matches` of the source match.
    pub from_match: usize,
    /// Index into `GenerationResult::matches` of the match receiving the winner.
    pub to_match: usize,
}

/// A null elimination slot to be filled by a group standing once the group stage ends.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct QualifierSlot {
    pub match_index: usize,
    pub slot: Slot,
    pub group: String,
    /// 1 = group winner, 2 = runner-up.
    pub position: u32,
}
