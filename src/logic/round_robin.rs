//! Round-robin schedule (circle method), used for leagues and for each group.

/// One round of a round-robin: the pairings actually played (bye pairings are dropped).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundRobinRound<T> {
    pub pairings: Vec<(T, T)>,
}

/// Build a full single round-robin for `entities` in input order.
///
/// 1. Odd count: append a bye placeholder so the working list has even size `n`.
/// 2. `n - 1` rounds. Position 0 stays fixed; the rest rotate one step after every round.
/// 3. Position `k` meets position `n - 1 - k`; pairings with the bye are dropped.
///
/// Fewer than 2 entities yields no rounds.
pub fn build_round_robin<T: Clone>(entities: &[T]) -> Vec<RoundRobinRound<T>> {
    if entities.len() < 2 {
        return Vec::new();
    }

    let mut slots: Vec<Option<&T>> = entities.iter().map(Some).collect();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }
    let n = slots.len();

    // Positions 1..n of the circle; position 0 is always slot 0.
    let mut ring: Vec<usize> = (1..n).collect();
    let mut rounds = Vec::with_capacity(n - 1);

    for _ in 0..n - 1 {
        let lineup: Vec<usize> = std::iter::once(0).chain(ring.iter().copied()).collect();
        let pairings = (0..n / 2)
            .filter_map(|k| match (slots[lineup[k]], slots[lineup[n - 1 - k]]) {
                (Some(a), Some(b)) => Some((a.clone(), b.clone())),
                _ => None,
            })
            .collect();
        rounds.push(RoundRobinRound { pairings });
        ring.rotate_right(1);
    }

    log::debug!(
        "round robin: {} entities, {} rounds",
        entities.len(),
        rounds.len()
    );
    rounds
}
