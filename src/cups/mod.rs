//! Cups and their reveal/lower animations.
//!
//! Each cup owns its motion state; the director advances it once per
//! frame and reacts to finished motions.

pub mod cup;
pub mod motion;

pub use cup::{Cup, Highlight, InteractionGate, MotionFinished};
pub use motion::{CupMotion, MotionKind, MotionStep};
