//! The ladder: a row of slots, each holding exactly two participants.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::types::{MAX_RANKING, MIN_RANKING, Participant, SlotPosition};

/// Arrangement of `2 * num_slots` participants across a row of slots.
///
/// Invariants (checked on construction):
/// - every slot index in `0..num_slots` holds exactly one `Top` and one
///   `Bottom` participant,
/// - every ranking lies in `[MIN_RANKING, MAX_RANKING]`,
/// - participant ids are unique.
///
/// The participant list is kept sorted by id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ladder {
    num_slots: usize,
    participants: Vec<Participant>,
}

impl Ladder {
    /// Build a ladder from an explicit participant list.
    ///
    /// Sorts by id and validates the slot invariants. This is the single
    /// construction path; every other constructor funnels through it.
    pub fn from_participants(
        num_slots: usize,
        mut participants: Vec<Participant>,
    ) -> Result<Ladder, String> {
        if num_slots == 0 {
            return Err("ladder needs at least one slot".to_string());
        }
        participants.sort_by(|a, b| a.id.cmp(&b.id));
        let ladder = Ladder {
            num_slots,
            participants,
        };
        ladder.validate()?;
        Ok(ladder)
    }

    /// Build a ladder with uniformly random rankings, two per slot.
    ///
    /// Ids are assigned left to right (`player-000` top of slot 0,
    /// `player-001` bottom of slot 0, and so on).
    pub fn random<R: Rng>(num_slots: usize, rng: &mut R) -> Result<Ladder, String> {
        let mut participants = Vec::with_capacity(num_slots * 2);
        for slot in 0..num_slots {
            for position in [SlotPosition::Top, SlotPosition::Bottom] {
                let n = slot * 2 + if position == SlotPosition::Top { 0 } else { 1 };
                participants.push(Participant::new(
                    format!("player-{:03}", n),
                    rng.gen_range(MIN_RANKING..=MAX_RANKING),
                    slot,
                    position,
                ));
            }
        }
        Ladder::from_participants(num_slots, participants)
    }

    /// Build a ladder from `(top, bottom)` ranking pairs, one pair per slot.
    pub fn from_rankings(rankings: &[(u8, u8)]) -> Result<Ladder, String> {
        let mut participants = Vec::with_capacity(rankings.len() * 2);
        for (slot, &(top, bottom)) in rankings.iter().enumerate() {
            participants.push(Participant::new(
                format!("player-{:03}", slot * 2),
                top,
                slot,
                SlotPosition::Top,
            ));
            participants.push(Participant::new(
                format!("player-{:03}", slot * 2 + 1),
                bottom,
                slot,
                SlotPosition::Bottom,
            ));
        }
        Ladder::from_participants(rankings.len(), participants)
    }

    pub fn num_slots(&self) -> usize {
        self.num_slots
    }

    /// Participants in id order.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn get(&self, id: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    /// Group participants by slot index into `(a, b)` contest pairs.
    ///
    /// Pair order within a slot carries no meaning; the contest rule is
    /// symmetric. Returns an error if any slot does not hold exactly two
    /// participants (which would mean the movement bookkeeping is wrong).
    pub fn slot_pairs(&self) -> Result<Vec<(&Participant, &Participant)>, String> {
        let mut by_slot: Vec<Vec<&Participant>> = vec![Vec::new(); self.num_slots];
        for p in &self.participants {
            if p.slot >= self.num_slots {
                return Err(format!(
                    "participant {} is in slot {} but the ladder has {} slots",
                    p.id, p.slot, self.num_slots
                ));
            }
            by_slot[p.slot].push(p);
        }
        let mut pairs = Vec::with_capacity(self.num_slots);
        for (slot, members) in by_slot.into_iter().enumerate() {
            match members.as_slice() {
                [a, b] => pairs.push((*a, *b)),
                other => {
                    return Err(format!(
                        "slot {} holds {} participants, expected 2",
                        slot,
                        other.len()
                    ));
                }
            }
        }
        Ok(pairs)
    }

    /// Redeal the existing rankings across the participant bodies without
    /// moving anyone between slots.
    pub fn shuffle_rankings<R: Rng>(&mut self, rng: &mut R) {
        let mut rankings: Vec<u8> = self.participants.iter().map(|p| p.ranking).collect();
        rankings.shuffle(rng);
        for (p, ranking) in self.participants.iter_mut().zip(rankings) {
            p.ranking = ranking;
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.participants.len() != self.num_slots * 2 {
            return Err(format!(
                "expected {} participants for {} slots, got {}",
                self.num_slots * 2,
                self.num_slots,
                self.participants.len()
            ));
        }
        for pair in self.participants.windows(2) {
            if pair[0].id == pair[1].id {
                return Err(format!("duplicate participant id {}", pair[0].id));
            }
        }
        for p in &self.participants {
            if !(MIN_RANKING..=MAX_RANKING).contains(&p.ranking) {
                return Err(format!(
                    "participant {} has ranking {} outside [{}, {}]",
                    p.id, p.ranking, MIN_RANKING, MAX_RANKING
                ));
            }
        }
        for (slot, (a, b)) in self.slot_pairs()?.into_iter().enumerate() {
            if a.position == b.position {
                return Err(format!(
                    "slot {} holds two {:?} participants ({}, {})",
                    slot, a.position, a.id, b.id
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "ladder_tests.rs"]
mod ladder_tests;
