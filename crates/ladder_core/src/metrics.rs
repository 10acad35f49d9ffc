//! Order metrics: how close is the arrangement to sorted-by-ranking?

use crate::ladder::Ladder;

/// Count participant pairs that are out of order across slots: the pair
/// sits in strictly different slots and the earlier slot holds the higher
/// ranking. Pairs sharing a slot or a ranking never count.
pub fn inversions(ladder: &Ladder) -> u64 {
    let ps = ladder.participants();
    let mut count = 0;
    for (i, p) in ps.iter().enumerate() {
        for q in &ps[i + 1..] {
            let inverted = (p.slot < q.slot && p.ranking > q.ranking)
                || (q.slot < p.slot && q.ranking > p.ranking);
            if inverted {
                count += 1;
            }
        }
    }
    count
}

/// Upper bound on `inversions` for a ladder of this width: every
/// cross-slot pair inverted. With `n` slots there are `2n(n-1)` such
/// pairs. Duplicate rankings make the bound unattainable, which only makes
/// `sortedness` read slightly generous.
pub fn max_inversions(ladder: &Ladder) -> u64 {
    let n = ladder.num_slots() as u64;
    2 * n * (n - 1)
}

/// Normalized order in `[0, 1]`: 1.0 means no cross-slot pair is out of
/// order, 0.0 means all of them are.
pub fn sortedness(ladder: &Ladder) -> f64 {
    let max = max_inversions(ladder);
    if max == 0 {
        return 1.0; // single slot: trivially sorted
    }
    1.0 - inversions(ladder) as f64 / max as f64
}

pub fn is_slot_sorted(ladder: &Ladder) -> bool {
    inversions(ladder) == 0
}

/// Average distance between each participant's slot and the slot it would
/// occupy if participants were dealt into slots in ranking order (two per
/// slot, lowest rankings leftmost). Ties are broken by id, which only
/// affects which of two equal rankings is charged for a half-slot of
/// displacement.
pub fn mean_slot_displacement(ladder: &Ladder) -> f64 {
    let ps = ladder.participants();
    let mut order: Vec<usize> = (0..ps.len()).collect();
    order.sort_by_key(|&i| (ps[i].ranking, &ps[i].id));

    let mut total = 0.0;
    for (sorted_index, &i) in order.iter().enumerate() {
        let ideal_slot = sorted_index / 2;
        total += (ps[i].slot as f64 - ideal_slot as f64).abs();
    }
    total / ps.len() as f64
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod metrics_tests;
