//! Round state, lifecycle phases and the selection history.

use serde::{Deserialize, Serialize};

use crate::core::CupId;
use crate::cups::InteractionGate;

/// Where the round lifecycle currently is.
///
/// Scoring and reassigning the correct cup happen instantly between
/// phases and show up only as events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Cups on their slots, no shuffle yet. Selection is allowed.
    #[default]
    Idle,
    Shuffling,
    AwaitingSelection,
    /// Showing the selected cup before lowering it.
    Pausing,
    LoweringRevealedCup,
    /// Short beat between the new correct cup being drawn and the shuffle.
    SettlingBeforeShuffle,
}

impl RoundPhase {
    /// Whether a selection is still being resolved.
    #[must_use]
    pub fn is_resolving(self) -> bool {
        matches!(self, RoundPhase::Pausing | RoundPhase::LoweringRevealedCup)
    }
}

/// Hidden correct cup plus the flags that gate interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Round {
    /// Incremented every time a correct cup is drawn.
    pub number: u32,
    pub correct: CupId,
    pub selected: Option<CupId>,
    pub shuffling: bool,
}

impl Round {
    #[must_use]
    pub fn new(number: u32, correct: CupId) -> Self {
        Self {
            number,
            correct,
            selected: None,
            shuffling: false,
        }
    }

    #[must_use]
    pub fn gate(&self) -> InteractionGate {
        InteractionGate {
            shuffling: self.shuffling,
            selected: self.selected,
        }
    }
}

/// Outcome of one resolved selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: u32,
    pub selected: CupId,
    pub correct: bool,
    pub points: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_round_is_open() {
        let round = Round::new(1, CupId::new(2));
        assert_eq!(round.selected, None);
        assert!(!round.shuffling);
        assert_eq!(round.gate(), InteractionGate::default());
    }

    #[test]
    fn test_resolving_phases() {
        assert!(RoundPhase::Pausing.is_resolving());
        assert!(RoundPhase::LoweringRevealedCup.is_resolving());
        assert!(!RoundPhase::SettlingBeforeShuffle.is_resolving());
        assert!(!RoundPhase::AwaitingSelection.is_resolving());
    }
}
