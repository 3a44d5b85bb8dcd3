//! Participant rules per tournament format.

use crate::logic::grouping::group_count;
use crate::models::{FixtureError, GenerationRequest, Participant, TournamentFormat};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Minimum participants for the groups + elimination format.
pub const MIN_GROUP_STAGE_PARTICIPANTS: usize = 4;
/// Minimum members of one group.
pub const MIN_GROUP_SIZE: usize = 2;

/// Result of `validate_participants`: `message` is shown to the end user as is.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub message: String,
}

impl ValidationOutcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            valid: true,
            message: message.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    /// `Ok` when valid, otherwise a `FixtureError::Validation` carrying the message.
    pub fn into_result(self) -> Result<(), FixtureError> {
        if self.valid {
            Ok(())
        } else {
            Err(FixtureError::Validation(self.message))
        }
    }
}

/// Check `participants` against the rules of `format`.
pub fn validate_participants(
    format: TournamentFormat,
    participants: &[Participant],
) -> ValidationOutcome {
    let mut seen = HashSet::with_capacity(participants.len());
    if let Some(dup) = participants.iter().find(|p| !seen.insert(p.id)) {
        return ValidationOutcome::invalid(format!(
            "Participant {} ('{}') is listed more than once",
            dup.id, dup.display_name
        ));
    }

    let count = participants.len();
    match format {
        TournamentFormat::League | TournamentFormat::Elimination => {
            if count < 2 {
                return ValidationOutcome::invalid(format!(
                    "{} requires at least 2 participants (got {})",
                    format.name(),
                    count
                ));
            }
        }
        TournamentFormat::GroupsAndElimination => {
            if count < MIN_GROUP_STAGE_PARTICIPANTS {
                return ValidationOutcome::invalid(format!(
                    "{} requires at least {} participants (got {})",
                    format.name(),
                    MIN_GROUP_STAGE_PARTICIPANTS,
                    count
                ));
            }
            let groups = group_count(count);
            // Dealing in turn leaves the last groups one member short at most.
            let smallest = count / groups;
            if groups < 2 || smallest < MIN_GROUP_SIZE {
                return ValidationOutcome::invalid(format!(
                    "{} participants cannot form {} groups of at least {}",
                    count, groups, MIN_GROUP_SIZE
                ));
            }
        }
    }

    ValidationOutcome::ok(format!("{} participants valid for {}", count, format.name()))
}

/// Request-level checks on top of the participant rules.
pub fn validate_request(
    format: TournamentFormat,
    request: &GenerationRequest,
) -> Result<(), FixtureError> {
    if request.start_date > request.end_date {
        return Err(FixtureError::Validation(format!(
            "Start date {} is after end date {}",
            request.start_date, request.end_date
        )));
    }
    validate_participants(format, &request.participants).into_result()
}
