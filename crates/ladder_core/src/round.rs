//! The simulation step: play every slot's contest and move the participants.

use rand::Rng;

use crate::ladder::Ladder;
use crate::types::{Participant, SlotPosition};

/// Decide the contest between `a` and `b`. Returns true if `a` wins.
///
/// Each side's chance is its ranking plus the fairness bias; the winner is
/// drawn proportionally. Fairness 0 makes the outcome purely proportional
/// to ranking (99 beats 1 ninety-nine times in a hundred); a large fairness
/// swamps the ranking gap and pushes every contest toward a coin flip.
pub fn match_winner<R: Rng>(a: &Participant, b: &Participant, fairness: u32, rng: &mut R) -> bool {
    // Draw in u64: the chances sum to just over 2^33 at the top of the
    // fairness range, which would wrap a u32
    let chance_a = a.ranking as u64 + fairness as u64;
    let chance_b = b.ranking as u64 + fairness as u64;
    rng.gen_range(0..chance_a + chance_b) < chance_a
}

/// Play one round: a contest per slot, winners right, losers left.
///
/// The winner enters the next slot at the top and the loser the previous
/// slot at the bottom. The rightmost winner and the leftmost loser would
/// shift out of bounds, so they stay put and take the vacated position
/// instead (bottom of the last slot, top of slot 0). The returned ladder is
/// re-sorted by participant id.
pub fn play_round<R: Rng>(ladder: &Ladder, fairness: u32, rng: &mut R) -> Result<Ladder, String> {
    let last_slot = ladder.num_slots() - 1;
    let mut next = Vec::with_capacity(ladder.participants().len());
    for (a, b) in ladder.slot_pairs()? {
        let (winner, loser) = if match_winner(a, b, fairness, rng) {
            (a, b)
        } else {
            (b, a)
        };
        next.push(advance_winner(winner, last_slot));
        next.push(retreat_loser(loser));
    }
    Ladder::from_participants(ladder.num_slots(), next)
}

fn advance_winner(winner: &Participant, last_slot: usize) -> Participant {
    let mut next = winner.clone();
    if winner.slot < last_slot {
        next.slot = winner.slot + 1;
        next.position = SlotPosition::Top;
    } else {
        next.slot = last_slot;
        next.position = SlotPosition::Bottom;
    }
    next
}

fn retreat_loser(loser: &Participant) -> Participant {
    let mut next = loser.clone();
    if loser.slot > 0 {
        next.slot = loser.slot - 1;
        next.position = SlotPosition::Bottom;
    } else {
        next.slot = 0;
        next.position = SlotPosition::Top;
    }
    next
}

#[cfg(test)]
#[path = "round_tests.rs"]
mod round_tests;
