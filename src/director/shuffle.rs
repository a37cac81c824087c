//! Shuffle runs and the swap "hop" animation.
//!
//! A shuffle is a fixed number of pairwise swaps played back one after
//! another. During a swap both cups travel along the straight line between
//! their starting positions and are pushed off that line along the arc
//! axis by `sin(t * PI) * arc_height`, in opposite directions, so they pass
//! each other instead of colliding. When the swap ends each cup is placed
//! exactly on the other's starting position.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::core::{Axis, CupId, Vec3};

/// Positions of both cups at progress `t` in `[0, 1]`.
#[must_use]
pub fn arc_positions(from_first: Vec3, from_second: Vec3, t: f32, height: f32, axis: Axis) -> (Vec3, Vec3) {
    let hop = (t * PI).sin() * height;
    let first = from_first.lerp(from_second, t).offset_along(axis, hop);
    let second = from_second.lerp(from_first, t).offset_along(axis, -hop);
    (first, second)
}

/// One swap in progress.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwapAnimation {
    pub first: CupId,
    pub second: CupId,
    pub from_first: Vec3,
    pub from_second: Vec3,
    /// Speed-scaled seconds since the swap began.
    pub elapsed: f32,
}

/// Result of advancing a swap by one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SwapStep {
    /// Mid-flight positions for (first, second).
    Moving(Vec3, Vec3),
    /// Final positions: each cup on the other's starting point.
    Done(Vec3, Vec3),
}

impl SwapAnimation {
    #[must_use]
    pub fn new(first: CupId, second: CupId, from_first: Vec3, from_second: Vec3) -> Self {
        Self {
            first,
            second,
            from_first,
            from_second,
            elapsed: 0.0,
        }
    }

    /// Advance by `scaled_dt` (frame time already multiplied by the
    /// shuffle speed).
    pub fn advance(&mut self, scaled_dt: f32, duration: f32, height: f32, axis: Axis) -> SwapStep {
        self.elapsed += scaled_dt;
        if self.elapsed < duration {
            let t = self.elapsed / duration;
            let (a, b) = arc_positions(self.from_first, self.from_second, t, height, axis);
            SwapStep::Moving(a, b)
        } else {
            SwapStep::Done(self.from_second, self.from_first)
        }
    }
}

/// Bookkeeping for a whole shuffle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShuffleRun {
    pub total: u32,
    pub completed: u32,
    pub current: Option<SwapAnimation>,
}

impl ShuffleRun {
    #[must_use]
    pub fn new(total: u32) -> Self {
        Self {
            total,
            completed: 0,
            current: None,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed >= self.total && self.current.is_none()
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.total.saturating_sub(self.completed)
    }
}
