//! Data structures for fixture generation: participants, fixtures, matches, results.

mod fixture;
mod game;
mod participant;
mod result;
mod tournament;

pub use fixture::{Fixture, FixtureKind, TournamentId};
pub use game::{BracketMatchView, Match, MatchState, QualifierSlot, RefereeId, Slot, SlotLink};
pub use participant::{Participant, ParticipantId};
pub use result::{GenerationMetadata, GenerationResult};
pub use tournament::{FixtureError, GenerationRequest, TournamentFormat, DEFAULT_VENUE};
