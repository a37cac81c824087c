//! Events the director reports to the host.
//!
//! Queued during input handling and `update`, drained with
//! `GameDirector::take_events`. Hosts use them for sound, UI text or
//! logging; none of the game logic depends on anyone reading them.

use serde::{Deserialize, Serialize};

use super::round::RoundPhase;
use crate::core::CupId;
use crate::cups::Highlight;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Cups laid out on their slots and a correct cup drawn.
    RoundStarted { round: u32 },
    PhaseChanged { from: RoundPhase, to: RoundPhase },
    ShuffleStarted { swaps: u32 },
    SwapStarted { first: CupId, second: CupId },
    SwapFinished { first: CupId, second: CupId },
    ShuffleFinished,
    HighlightChanged { cup: CupId, mode: Highlight },
    /// Click accepted; the cup starts rising.
    CupRevealed { cup: CupId },
    /// The cup reached its raised position.
    CupRaised { cup: CupId },
    SelectionChecked { cup: CupId, correct: bool },
    ScoreChanged { total: u32 },
    LoweringStarted { cup: CupId },
    CupLowered { cup: CupId },
    /// A new correct cup was drawn for the next shuffle.
    CorrectCupReassigned { round: u32 },
}
