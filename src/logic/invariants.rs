//! Structural checks run on every generated result before it leaves the engine.

use crate::models::{FixtureError, FixtureKind, GenerationResult, MatchState, Participant, Slot};
use std::collections::{HashMap, HashSet};

fn violation(msg: String) -> FixtureError {
    FixtureError::InvariantViolation(msg)
}

/// Verify a generated result against the participants it was built from.
///
/// A null slot must be the bye of a walkover, a slot fed by a progression link, or a
/// slot waiting on a group standing. Anything else (a match nobody can ever fill) fails.
pub fn check_generation(
    result: &GenerationResult,
    participants: &[Participant],
) -> Result<(), FixtureError> {
    check_rounds(result)?;
    check_links(result)?;

    let ids: HashSet<_> = participants.iter().map(|p| p.id).collect();
    let mut sourced: HashSet<(usize, Slot)> = result
        .metadata
        .progression
        .iter()
        .map(|l| (l.to_match, l.slot))
        .collect();
    sourced.extend(
        result
            .metadata
            .qualifier_slots
            .iter()
            .map(|q| (q.match_index, q.slot)),
    );

    for (i, m) in result.matches.iter().enumerate() {
        let fixture = result.fixtures.get(m.fixture_ref).ok_or_else(|| {
            violation(format!("match {} points at missing fixture {}", i, m.fixture_ref))
        })?;

        for id in [m.participant_a, m.participant_b].into_iter().flatten() {
            if !ids.contains(&id) {
                return Err(violation(format!("match {} names unknown participant {}", i, id)));
            }
        }
        if m.participant_a.is_some() && m.participant_a == m.participant_b {
            return Err(violation(format!("match {} pits a participant against itself", i)));
        }

        match fixture.kind {
            FixtureKind::LeagueRound | FixtureKind::GroupRound => {
                if !m.both_known() || m.state != MatchState::Scheduled {
                    return Err(violation(format!("round-robin match {} is incomplete", i)));
                }
            }
            FixtureKind::EliminationRound => {
                let open: Vec<Slot> = [Slot::A, Slot::B]
                    .into_iter()
                    .filter(|&s| m.participant(s).is_none() && !sourced.contains(&(i, s)))
                    .collect();
                let allowed = match m.state {
                    MatchState::Walkover => open.len() == 1,
                    _ => open.is_empty(),
                };
                if !allowed {
                    return Err(violation(format!(
                        "match {} has {} slot(s) with no participant and no source",
                        i,
                        open.len()
                    )));
                }
            }
        }
    }

    if result.metadata.fixture_count != result.fixtures.len()
        || result.metadata.match_count != result.matches.len()
    {
        return Err(violation("metadata counts do not match the result".to_string()));
    }
    Ok(())
}

/// Round numbers of each phase (kind + group) run 1, 2, 3, ... in emission order.
fn check_rounds(result: &GenerationResult) -> Result<(), FixtureError> {
    let mut last: HashMap<(FixtureKind, Option<&str>), u32> = HashMap::new();
    for f in &result.fixtures {
        let prev = last.entry((f.kind, f.group.as_deref())).or_insert(0);
        if f.round_number != *prev + 1 {
            return Err(violation(format!(
                "fixture '{}' has round {} after round {}",
                f.name, f.round_number, prev
            )));
        }
        *prev = f.round_number;
    }
    Ok(())
}

/// At most one outgoing link per match and one incoming link per slot.
fn check_links(result: &GenerationResult) -> Result<(), FixtureError> {
    let mut outgoing = HashSet::new();
    let mut incoming = HashSet::new();
    for l in &result.metadata.progression {
        if l.from_match >= result.matches.len() || l.to_match >= result.matches.len() {
            return Err(violation(format!("link {:?} points outside the match list", l)));
        }
        if l.next_round != l.round + 1
            || l.next_index != l.index / 2
            || l.slot != Slot::for_index(l.index)
        {
            return Err(violation(format!("link {:?} breaks the bracket layout", l)));
        }
        if result.matches[l.from_match].state == MatchState::Walkover {
            return Err(violation(format!("walkover match {} has an outgoing link", l.from_match)));
        }
        if !outgoing.insert(l.from_match) {
            return Err(violation(format!(
                "match {} has more than one outgoing link",
                l.from_match
            )));
        }
        if !incoming.insert((l.to_match, l.slot)) {
            return Err(violation(format!(
                "slot {:?} of match {} is fed twice",
                l.slot, l.to_match
            )));
        }
    }
    Ok(())
}
