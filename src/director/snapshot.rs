//! Serializable view of the director for debugging and host tooling.
//!
//! The correct cup is deliberately left out.

use serde::{Deserialize, Serialize};

use super::round::RoundPhase;
use crate::core::{CupId, GameRngState, Vec3};
use crate::cups::Highlight;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CupSnapshot {
    pub id: CupId,
    pub position: Vec3,
    pub revealed: bool,
    pub highlight: Highlight,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectorSnapshot {
    pub phase: RoundPhase,
    pub round: u32,
    pub shuffling: bool,
    pub selected: Option<CupId>,
    pub cups: Vec<CupSnapshot>,
    pub resolved_selections: usize,
    pub rng: GameRngState,
    pub shuffle_rng: GameRngState,
}
