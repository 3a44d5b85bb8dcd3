//! Fixture generation logic: round robin, elimination bracket, groups, strategy selection.

mod context;
mod elimination;
mod grouping;
mod invariants;
mod round_robin;
mod validation;

pub use context::{FixtureContext, StrategyInfo, ADVANCERS_PER_GROUP};
pub use elimination::{
    bracket_size, build_bracket, round_name, seeding_order, Bracket, BracketLink, BracketMatch,
    BracketRound,
};
pub use grouping::{group_count, group_label, partition, TARGET_GROUP_SIZE};
pub use invariants::check_generation;
pub use round_robin::{build_round_robin, RoundRobinRound};
pub use validation::{
    validate_participants, validate_request, ValidationOutcome, MIN_GROUP_SIZE,
    MIN_GROUP_STAGE_PARTICIPANTS,
};
