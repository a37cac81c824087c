//! Per-cup motion state for reveal and lower.
//!
//! A motion is a target plus a constant speed. Each frame the cup steps
//! toward the target by `speed * dt`; once it is within the snap epsilon it
//! lands exactly on the target so no floating-point residue survives.

use serde::{Deserialize, Serialize};

use crate::core::Vec3;

/// Which way a cup is moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MotionKind {
    /// Rising off the table to show what is underneath.
    Reveal,
    /// Returning to the recorded origin.
    Lower,
}

/// An in-flight reveal or lower.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CupMotion {
    pub kind: MotionKind,
    pub target: Vec3,
    pub speed: f32,
}

/// Result of advancing a motion by one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MotionStep {
    /// Still moving; new position.
    Moving(Vec3),
    /// Settled exactly on the target.
    Arrived(Vec3),
}

impl MotionStep {
    #[must_use]
    pub fn position(self) -> Vec3 {
        match self {
            MotionStep::Moving(p) | MotionStep::Arrived(p) => p,
        }
    }
}

impl CupMotion {
    #[must_use]
    pub fn new(kind: MotionKind, target: Vec3, speed: f32) -> Self {
        Self { kind, target, speed }
    }

    /// Step from `position` by one frame of `dt` seconds.
    #[must_use]
    pub fn step(&self, position: Vec3, dt: f32, epsilon: f32) -> MotionStep {
        let next = position.move_towards(self.target, self.speed * dt);
        if next.distance(self.target) <= epsilon {
            MotionStep::Arrived(self.target)
        } else {
            MotionStep::Moving(next)
        }
    }
}
