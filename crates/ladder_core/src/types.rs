use serde::{Deserialize, Serialize};

/// Lowest allowed ranking.
pub const MIN_RANKING: u8 = 1;
/// Highest allowed ranking.
pub const MAX_RANKING: u8 = 99;

/// Where a participant sits within its slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotPosition {
    Top,
    Bottom,
}

impl SlotPosition {
    pub fn other(self) -> SlotPosition {
        match self {
            SlotPosition::Top => SlotPosition::Bottom,
            SlotPosition::Bottom => SlotPosition::Top,
        }
    }
}

/// A ranked participant occupying one half of a slot.
///
/// The id is the participant's stable identity: it never changes as the
/// participant moves between slots, and ladders keep their participant
/// lists sorted by it so that round output is deterministic given the
/// random number stream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    /// Skill ranking in `[MIN_RANKING, MAX_RANKING]`.
    pub ranking: u8,
    /// Index of the slot currently holding this participant.
    pub slot: usize,
    pub position: SlotPosition,
}

impl Participant {
    pub fn new(id: impl Into<String>, ranking: u8, slot: usize, position: SlotPosition) -> Self {
        Self {
            id: id.into(),
            ranking,
            slot,
            position,
        }
    }
}
