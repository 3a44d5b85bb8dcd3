//! GenerationResult and its metadata.

use crate::models::fixture::Fixture;
use crate::models::game::{Match, QualifierSlot, Slot, SlotLink};
use serde::{Deserialize, Serialize};

/// Structural counts and the slot-progression mapping for one generated fixture set.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct GenerationMetadata {
    /// Human-readable strategy name.
    pub strategy: String,
    /// Numeric tournament type code (0 league, 1 elimination, 2 groups + elimination).
    pub format: u8,
    /// Rounds per phase: league rounds, group rounds per group, or bracket rounds.
    /// For groups + elimination this is the longest group's round count.
    pub rounds: u32,
    /// Elimination rounds (0 for league).
    pub elimination_rounds: u32,
    pub groups: usize,
    /// Round-1 walkovers in the elimination phase.
    pub byes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bracket_size: Option<usize>,
    pub fixture_count: usize,
    pub match_count: usize,
    pub progression: Vec<SlotLink>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub qualifier_slots: Vec<QualifierSlot>,
}

/// Everything one generation call produces. Owned by the caller; the engine keeps nothing.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub fixtures: Vec<Fixture>,
    pub matches: Vec<Match>,
    pub metadata: GenerationMetadata,
}

impl GenerationResult {
    /// Matches of one fixture, with their indices into `matches`, in generation order.
    pub fn matches_in_fixture(&self, fixture_ref: usize) -> impl Iterator<Item = (usize, &Match)> {
        self.matches
            .iter()
            .enumerate()
            .filter(move |(_, m)| m.fixture_ref == fixture_ref)
    }

    /// Outgoing progression link of a match (none for finals, walkovers, and league games).
    pub fn link_from(&self, match_index: usize) -> Option<&SlotLink> {
        self.metadata
            .progression
            .iter()
            .find(|l| l.from_match == match_index)
    }

    /// Incoming progression links of a match.
    pub fn links_into(&self, match_index: usize) -> impl Iterator<Item = &SlotLink> {
        self.metadata
            .progression
            .iter()
            .filter(move |l| l.to_match == match_index)
    }

    /// Group standing that fills a slot, if the slot waits on the group stage.
    pub fn qualifier_for(&self, match_index: usize, slot: Slot) -> Option<&QualifierSlot> {
        self.metadata
            .qualifier_slots
            .iter()
            .find(|q| q.match_index == match_index && q.slot == slot)
    }
}
