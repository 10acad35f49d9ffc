//! Core ladder simulation logic.
//!
//! A ladder is a row of slots, each holding exactly two ranked participants.
//! One round plays a weighted coin flip per slot: the winner shifts one slot
//! to the right (entering at the top), the loser one slot to the left
//! (entering at the bottom), with both moves clamped at the ends of the row.
//!
//! The crate also provides order metrics (inversions, sortedness, slot
//! displacement) for asking the question the simulation exists to explore:
//! does repeated play sort the participants by ranking?

pub mod ladder;
pub mod metrics;
pub mod round;
pub mod types;

pub use ladder::*;
pub use metrics::*;
pub use round::*;
pub use types::*;
