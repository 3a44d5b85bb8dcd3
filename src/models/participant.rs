//! Participant: the normalized view of a tournament entrant (individual or team).

use serde::{Deserialize, Serialize};

/// Identifier of a participant, unique within one tournament.
pub type ParticipantId = i64;

/// An entrant of the tournament. Order in the input slice is the only seeding source.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub display_name: String,
    #[serde(default)]
    pub is_team: bool,
    /// Back-reference to the club team, copied through untouched.
    #[serde(default)]
    pub team_id: Option<i64>,
    /// Back-reference to the club member, copied through untouched.
    #[serde(default)]
    pub member_id: Option<i64>,
}

impl Participant {
    /// An individual entrant (a single member).
    pub fn individual(id: ParticipantId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            is_team: false,
            team_id: None,
            member_id: None,
        }
    }

    /// A team entrant.
    pub fn team(id: ParticipantId, display_name: impl Into<String>) -> Self {
        Self {
            is_team: true,
            ..Self::individual(id, display_name)
        }
    }

    pub fn with_member(mut self, member_id: i64) -> Self {
        self.member_id = Some(member_id);
        self
    }

    pub fn with_team(mut self, team_id: i64) -> Self {
        self.team_id = Some(team_id);
        self
    }
}
