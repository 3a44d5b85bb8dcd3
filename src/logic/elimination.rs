//! Single-elimination bracket: seeding, byes (walkovers), and round-to-round slot links.

use crate::models::{FixtureError, Slot};

/// One bracket match. `None` is a bye in a walkover, otherwise TBD.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BracketMatch<T> {
    pub a: Option<T>,
    pub b: Option<T>,
    /// Exactly one side present in round 1; that side advances without play.
    pub walkover: bool,
}

impl<T: Clone> BracketMatch<T> {
    fn walkover_winner(&self) -> Option<T> {
        if self.walkover {
            self.a.clone().or_else(|| self.b.clone())
        } else {
            None
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BracketRound<T> {
    pub matches: Vec<BracketMatch<T>>,
}

/// Winner of `(round, index)` goes to `(next_round, next_index)` in `slot`. Rounds are 1-based.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BracketLink {
    pub round: u32,
    pub index: usize,
    pub next_round: u32,
    pub next_index: usize,
    pub slot: Slot,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bracket<T> {
    /// Smallest power of two >= entrant count (at least 2).
    pub size: usize,
    pub byes: usize,
    pub rounds: Vec<BracketRound<T>>,
    pub links: Vec<BracketLink>,
}

/// Smallest power of two that holds `participants` (minimum 2).
pub fn bracket_size(participants: usize) -> usize {
    participants.max(2).next_power_of_two()
}

/// Standard seeding order for a power-of-two bracket, 1-based.
///
/// Built by doubling: every seed `s` of the previous order is followed by its
/// opponent `n + 1 - s`, so seeds 1 and 2 can only meet in the final.
pub fn seeding_order(size: usize) -> Vec<usize> {
    let mut order = vec![1];
    while order.len() < size {
        let n = order.len() * 2;
        order = order.iter().flat_map(|&s| [s, n + 1 - s]).collect();
    }
    order
}

/// Fixture name from distance to the final.
pub fn round_name(round_number: u32, total_rounds: u32) -> String {
    match total_rounds.saturating_sub(round_number) {
        0 => "Final".to_string(),
        1 => "Semifinal".to_string(),
        2 => "Cuartos de Final".to_string(),
        3 => "Octavos de Final".to_string(),
        _ => format!("Ronda {}", round_number),
    }
}

/// Build a balanced single-elimination bracket for `entities`, seeded in input order.
///
/// The `size - len` best seeds get a walkover in round 1; their sole participant is
/// written straight into round 2. Every other non-final match gets a link to
/// `(round + 1, index / 2)`, slot A for even indices, B for odd.
pub fn build_bracket<T: Clone>(entities: &[T]) -> Result<Bracket<T>, FixtureError> {
    if entities.len() < 2 {
        return Err(FixtureError::Validation(
            "An elimination bracket needs at least 2 participants".to_string(),
        ));
    }

    let size = bracket_size(entities.len());
    let byes = size - entities.len();
    let total_rounds = size.trailing_zeros();

    let seeded: Vec<Option<T>> = seeding_order(size)
        .into_iter()
        .map(|seed| entities.get(seed - 1).cloned())
        .collect();

    let mut first = Vec::with_capacity(size / 2);
    for (i, pair) in seeded.chunks_exact(2).enumerate() {
        let (a, b) = (pair[0].clone(), pair[1].clone());
        if a.is_none() && b.is_none() {
            return Err(FixtureError::InvariantViolation(format!(
                "round 1 match {} would have two byes",
                i
            )));
        }
        let walkover = a.is_none() || b.is_none();
        first.push(BracketMatch { a, b, walkover });
    }

    let mut rounds = vec![BracketRound { matches: first }];
    while rounds.len() < total_rounds as usize {
        let prev = &rounds[rounds.len() - 1].matches;
        let matches = prev
            .chunks_exact(2)
            .map(|feeders| BracketMatch {
                a: feeders[0].walkover_winner(),
                b: feeders[1].walkover_winner(),
                walkover: false,
            })
            .collect();
        rounds.push(BracketRound { matches });
    }

    let mut links = Vec::new();
    for (r, round) in rounds.iter().enumerate().take(rounds.len() - 1) {
        let round_number = r as u32 + 1;
        for (index, m) in round.matches.iter().enumerate() {
            if m.walkover {
                continue;
            }
            links.push(BracketLink {
                round: round_number,
                index,
                next_round: round_number + 1,
                next_index: index / 2,
                slot: Slot::for_index(index),
            });
        }
    }

    log::debug!(
        "bracket: {} entrants, size {}, {} byes, {} rounds, {} links",
        entities.len(),
        size,
        byes,
        rounds.len(),
        links.len()
    );

    Ok(Bracket {
        size,
        byes,
        rounds,
        links,
    })
}
