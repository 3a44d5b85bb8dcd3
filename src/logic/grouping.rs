//! Group partitioning for the groups + elimination format.

/// Target members per group.
pub const TARGET_GROUP_SIZE: usize = 4;

/// Number of groups for `participants`: `max(2, round(participants / 4))`, halves rounding up.
pub fn group_count(participants: usize) -> usize {
    ((participants + TARGET_GROUP_SIZE / 2) / TARGET_GROUP_SIZE).max(2)
}

/// Deal `entities` across `groups` groups in input order (0 -> A, 1 -> B, ..., wrapping),
/// so a strongest-first ordering spreads across groups instead of filling one.
pub fn partition<T: Clone>(entities: &[T], groups: usize) -> Vec<Vec<T>> {
    if groups == 0 {
        return Vec::new();
    }
    let mut out: Vec<Vec<T>> = (0..groups)
        .map(|_| Vec::with_capacity(entities.len() / groups + 1))
        .collect();
    for (i, e) in entities.iter().enumerate() {
        out[i % groups].push(e.clone());
    }
    out
}

/// Group label: "A".."Z", then "AA", "AB", ...
pub fn group_label(index: usize) -> String {
    let mut label = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        label.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    label.reverse();
    String::from_utf8_lossy(&label).into_owned()
}
