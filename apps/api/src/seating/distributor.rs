use indexmap::IndexMap;
use rand::Rng;

use crate::seating::models::{Record, UNKNOWN_ORGANIZATION};

/// Grouping key for a record. Falls back to `"Unknown"` when the field is
/// absent or empty, so rows missing an organization share one group.
pub fn organization_key<'a>(record: &'a Record, org_field: &str) -> &'a str {
    match record.get(org_field) {
        Some(value) if !value.is_empty() => value,
        _ => UNKNOWN_ORGANIZATION,
    }
}

/// Partitions records by organization key.
/// Keys are in first-appearance order; each group keeps input order.
pub fn group_by_organization<'a>(
    records: &'a [Record],
    org_field: &str,
) -> IndexMap<&'a str, Vec<&'a Record>> {
    let mut groups: IndexMap<&str, Vec<&Record>> = IndexMap::new();
    for record in records {
        groups
            .entry(organization_key(record, org_field))
            .or_default()
            .push(record);
    }
    groups
}

/// Fisher–Yates: for `i` from the last index down to 1, swap with a uniform `j` in `[0, i]`.
pub fn shuffle_in_place<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Round-robin seating order using the thread-local RNG when `randomize` is set.
pub fn distribute(records: &[Record], org_field: &str, randomize: bool) -> Vec<Record> {
    distribute_with_rng(records, org_field, randomize, &mut rand::rng())
}

/// Interleaves organizations one candidate per round.
///
/// Round `r` visits every organization in key order (first appearance, or
/// shuffled when `randomize` is set) and seats its `r`-th candidate if it has
/// one. Exhausted organizations are skipped, so a dominant organization ends
/// up seated back to back in the final rounds.
pub fn distribute_with_rng<R: Rng>(
    records: &[Record],
    org_field: &str,
    randomize: bool,
    rng: &mut R,
) -> Vec<Record> {
    let groups = group_by_organization(records, org_field);
    let mut keys: Vec<&str> = groups.keys().copied().collect();

    if randomize {
        shuffle_in_place(&mut keys, rng);
    }

    let max_group_size = groups.values().map(Vec::len).max().unwrap_or(0);

    let mut order = Vec::with_capacity(records.len());
    for round in 0..max_group_size {
        for key in &keys {
            if let Some(record) = groups.get(key).and_then(|group| group.get(round)) {
                order.push((*record).clone());
            }
        }
    }
    order
}
