//! Round lifecycle: shuffling, selection, scoring and the reshuffle
//! sequence.
//!
//! `GameDirector` is the only type that mutates cups. Hosts feed it input
//! and frame times, and read positions, highlights and events back.

#[allow(clippy::module_inception)]
mod director;
pub mod events;
pub mod round;
pub mod shuffle;
pub mod snapshot;

pub use director::GameDirector;
pub use events::GameEvent;
pub use round::{Round, RoundPhase, RoundRecord};
pub use shuffle::{arc_positions, ShuffleRun, SwapAnimation, SwapStep};
pub use snapshot::{CupSnapshot, DirectorSnapshot};
