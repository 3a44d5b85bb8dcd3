//! Club tournament fixture generator: library with models and scheduling logic.

pub mod config;
pub mod logic;
pub mod models;

pub use logic::{
    build_bracket, build_round_robin, check_generation, group_count, partition, seeding_order,
    validate_participants, FixtureContext, StrategyInfo, ValidationOutcome,
};
pub use models::{
    BracketMatchView, Fixture, FixtureError, FixtureKind, GenerationMetadata, GenerationRequest,
    GenerationResult, Match, MatchState, Participant, ParticipantId, QualifierSlot, Slot, SlotLink,
    TournamentFormat, TournamentId, DEFAULT_VENUE,
};
