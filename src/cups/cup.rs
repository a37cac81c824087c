//! A single cup: position, reveal state, highlight and motion.

use serde::{Deserialize, Serialize};

use super::motion::{CupMotion, MotionKind, MotionStep};
use crate::core::{CupId, Vec3};

/// Outline mode shown by the host renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Highlight {
    /// Resting look.
    #[default]
    SilhouetteOnly,
    /// Hovered and selectable.
    FullOutline,
}

/// Round state a cup needs to decide whether it accepts input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionGate {
    pub shuffling: bool,
    pub selected: Option<CupId>,
}

/// A finished motion, reported by [`Cup::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionFinished {
    Raised,
    Lowered,
}

/// One cup on the table.
///
/// The director writes positions directly while swapping; everything else
/// (reveal, lower, hover) goes through the methods here so the revealed
/// flag, origin and motion stay consistent.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Cup {
    id: CupId,
    position: Vec3,
    /// Position captured when the reveal started.
    origin: Vec3,
    revealed: bool,
    highlight: Highlight,
    motion: Option<CupMotion>,
}

impl Cup {
    #[must_use]
    pub fn new(id: CupId, position: Vec3) -> Self {
        Self {
            id,
            position,
            origin: position,
            revealed: false,
            highlight: Highlight::SilhouetteOnly,
            motion: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> CupId {
        self.id
    }

    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[must_use]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn highlight(&self) -> Highlight {
        self.highlight
    }

    #[must_use]
    pub fn motion(&self) -> Option<&CupMotion> {
        self.motion.as_ref()
    }

    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.motion.is_some()
    }

    pub(crate) fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// True iff this cup is down, nothing is shuffling and nothing is selected.
    #[must_use]
    pub fn can_interact(&self, gate: InteractionGate) -> bool {
        !self.revealed && !gate.shuffling && gate.selected.is_none()
    }

    /// Change the outline if it differs and the cup is interactable.
    ///
    /// Returns the new mode when it changed.
    pub fn set_highlight(&mut self, mode: Highlight, gate: InteractionGate) -> Option<Highlight> {
        if self.highlight == mode || !self.can_interact(gate) {
            return None;
        }
        self.highlight = mode;
        Some(mode)
    }

    pub fn on_pointer_enter(&mut self, gate: InteractionGate) -> Option<Highlight> {
        self.set_highlight(Highlight::FullOutline, gate)
    }

    pub fn on_pointer_exit(&mut self, gate: InteractionGate) -> Option<Highlight> {
        self.set_highlight(Highlight::SilhouetteOnly, gate)
    }

    /// Start the reveal if the cup is interactable.
    ///
    /// Returns `true` when the click was accepted; the caller is then
    /// responsible for checking the selection.
    pub fn on_pointer_click(&mut self, gate: InteractionGate, height: f32, speed: f32) -> bool {
        if !self.can_interact(gate) {
            return false;
        }
        self.revealed = true;
        self.origin = self.position;
        let target = self.origin + Vec3::UP * height;
        self.motion = Some(CupMotion::new(MotionKind::Reveal, target, speed));
        true
    }

    /// Start moving back to the origin. Replaces an unfinished reveal.
    ///
    /// Returns `false` if the cup is not revealed.
    pub fn lower(&mut self, speed: f32) -> bool {
        if !self.revealed {
            return false;
        }
        self.motion = Some(CupMotion::new(MotionKind::Lower, self.origin, speed));
        true
    }

    /// Advance the active motion by `dt` seconds.
    ///
    /// When a lower finishes the cup is down again (`is_revealed` false) and
    /// sits exactly on its origin.
    pub fn advance(&mut self, dt: f32, epsilon: f32) -> Option<MotionFinished> {
        let motion = self.motion?;

        match motion.step(self.position, dt, epsilon) {
            MotionStep::Moving(p) => {
                self.position = p;
                None
            }
            MotionStep::Arrived(p) => {
                self.position = p;
                self.motion = None;
                match motion.kind {
                    MotionKind::Reveal => Some(MotionFinished::Raised),
                    MotionKind::Lower => {
                        self.revealed = false;
                        Some(MotionFinished::Lowered)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPEN: InteractionGate = InteractionGate { shuffling: false, selected: None };
    const EPS: f32 = 0.01;

    fn run_to_rest(cup: &mut Cup) -> MotionFinished {
        for _ in 0..10_000 {
            if let Some(done) = cup.advance(1.0 / 60.0, EPS) {
                return done;
            }
        }
        panic!("motion never finished");
    }

    #[test]
    fn test_new_cup_is_down() {
        let cup = Cup::new(CupId::new(0), Vec3::new(-2.0, 0.0, 0.0));
        assert!(!cup.is_revealed());
        assert!(!cup.is_moving());
        assert_eq!(cup.highlight(), Highlight::SilhouetteOnly);
        assert!(cup.can_interact(OPEN));
    }

    #[test]
    fn test_gate_blocks_interaction() {
        let cup = Cup::new(CupId::new(0), Vec3::ZERO);

        let shuffling = InteractionGate { shuffling: true, selected: None };
        assert!(!cup.can_interact(shuffling));

        let selected = InteractionGate { shuffling: false, selected: Some(CupId::new(2)) };
        assert!(!cup.can_interact(selected));
    }

    #[test]
    fn test_hover_toggles_outline() {
        let mut cup = Cup::new(CupId::new(0), Vec3::ZERO);

        assert_eq!(cup.on_pointer_enter(OPEN), Some(Highlight::FullOutline));
        // Same mode again is not a change
        assert_eq!(cup.on_pointer_enter(OPEN), None);
        assert_eq!(cup.on_pointer_exit(OPEN), Some(Highlight::SilhouetteOnly));
    }

    #[test]
    fn test_hover_ignored_while_shuffling() {
        let mut cup = Cup::new(CupId::new(0), Vec3::ZERO);
        let gate = InteractionGate { shuffling: true, selected: None };

        assert_eq!(cup.on_pointer_enter(gate), None);
        assert_eq!(cup.highlight(), Highlight::SilhouetteOnly);
    }

    #[test]
    fn test_click_reveals_then_lower_returns_exactly() {
        let start = Vec3::new(0.37, 0.0, -0.11);
        let mut cup = Cup::new(CupId::new(1), start);

        assert!(cup.on_pointer_click(OPEN, 1.0, 5.0));
        assert!(cup.is_revealed());
        assert_eq!(cup.origin(), start);

        assert_eq!(run_to_rest(&mut cup), MotionFinished::Raised);
        assert_eq!(cup.position(), start + Vec3::UP);
        assert!(cup.is_revealed());

        assert!(cup.lower(5.0));
        assert_eq!(run_to_rest(&mut cup), MotionFinished::Lowered);
        assert_eq!(cup.position(), start);
        assert_eq!(cup.position().distance(cup.origin()), 0.0);
        assert!(!cup.is_revealed());
    }

    #[test]
    fn test_click_rejected_when_revealed() {
        let mut cup = Cup::new(CupId::new(0), Vec3::ZERO);
        assert!(cup.on_pointer_click(OPEN, 1.0, 5.0));
        assert!(!cup.on_pointer_click(OPEN, 1.0, 5.0));
    }

    #[test]
    fn test_lower_requires_reveal() {
        let mut cup = Cup::new(CupId::new(0), Vec3::ZERO);
        assert!(!cup.lower(5.0));
        assert!(!cup.is_moving());
    }

    #[test]
    fn test_lower_interrupts_reveal() {
        let mut cup = Cup::new(CupId::new(0), Vec3::ZERO);
        cup.on_pointer_click(OPEN, 1.0, 5.0);
        cup.advance(0.05, EPS);
        assert!(cup.position().y > 0.0);

        cup.lower(5.0);
        assert_eq!(run_to_rest(&mut cup), MotionFinished::Lowered);
        assert_eq!(cup.position(), Vec3::ZERO);
    }
}
