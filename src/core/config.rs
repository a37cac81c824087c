//! Game configuration.
//!
//! Everything here is a startup-time constant. Hosts build a
//! `ShellGameConfig` (or deserialize one), and the director validates it
//! once in `GameDirector::new`.
//!
//! ```
//! use shell_game::core::{ShellGameConfig, Vec3};
//!
//! let config = ShellGameConfig::default()
//!     .with_shuffle_count(8)
//!     .with_slots(vec![
//!         Vec3::new(-3.0, 0.0, 0.0),
//!         Vec3::new(-1.0, 0.0, 0.0),
//!         Vec3::new(1.0, 0.0, 0.0),
//!         Vec3::new(3.0, 0.0, 0.0),
//!     ]);
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.cup_count(), 4);
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::math::{Axis, Vec3};

/// Where the observer camera sits and what it looks at.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 5.0, -5.0),
            look_at: Vec3::ZERO,
        }
    }
}

/// Complete game configuration.
///
/// Durations are seconds; speeds are world units per second except
/// `shuffle_speed`, which scales how fast shuffle time elapses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellGameConfig {
    /// Height a cup rises when revealed.
    pub reveal_height: f32,

    /// Speed of the reveal and lower motions.
    pub reveal_speed: f32,

    /// Swaps per shuffle.
    pub shuffle_count: u32,

    /// Length of a single swap, in speed-scaled seconds.
    pub shuffle_duration: f32,

    /// Multiplier on frame time while swapping.
    pub shuffle_speed: f32,

    /// Peak perpendicular offset of the swap hop.
    pub arc_height: f32,

    /// Axis the hop offset is applied on.
    pub arc_axis: Axis,

    /// Pause after a selection before the revealed cup lowers.
    pub wait_before_shuffle: f32,

    /// Pause between reassigning the correct cup and the next shuffle.
    pub settle_before_shuffle: f32,

    /// Distance below which a moving cup snaps onto its target.
    pub snap_epsilon: f32,

    /// Points awarded for finding the correct cup.
    pub points_per_correct: u32,

    /// Rest positions, one per cup. Cup `i` starts on slot `i`.
    pub slots: Vec<Vec3>,

    /// Cup orientation handed to the host at spawn (Euler degrees).
    pub cup_rotation: Vec3,

    pub camera: CameraPose,
}

impl Default for ShellGameConfig {
    fn default() -> Self {
        Self {
            reveal_height: 1.0,
            reveal_speed: 5.0,
            shuffle_count: 5,
            shuffle_duration: 0.5,
            shuffle_speed: 3.0,
            arc_height: 1.0,
            arc_axis: Axis::Z,
            wait_before_shuffle: 2.0,
            settle_before_shuffle: 0.5,
            snap_epsilon: 0.01,
            points_per_correct: 10,
            slots: vec![
                Vec3::new(-2.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(2.0, 0.0, 0.0),
            ],
            cup_rotation: Vec3::new(90.0, 0.0, 0.0),
            camera: CameraPose::default(),
        }
    }
}

impl ShellGameConfig {
    /// Number of cups (one per slot).
    #[must_use]
    pub fn cup_count(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn with_slots(mut self, slots: Vec<Vec3>) -> Self {
        self.slots = slots;
        self
    }

    #[must_use]
    pub fn with_shuffle_count(mut self, count: u32) -> Self {
        self.shuffle_count = count;
        self
    }

    #[must_use]
    pub fn with_shuffle_timing(mut self, duration: f32, speed: f32) -> Self {
        self.shuffle_duration = duration;
        self.shuffle_speed = speed;
        self
    }

    #[must_use]
    pub fn with_arc(mut self, height: f32, axis: Axis) -> Self {
        self.arc_height = height;
        self.arc_axis = axis;
        self
    }

    #[must_use]
    pub fn with_reveal(mut self, height: f32, speed: f32) -> Self {
        self.reveal_height = height;
        self.reveal_speed = speed;
        self
    }

    #[must_use]
    pub fn with_pauses(mut self, before_lower: f32, before_shuffle: f32) -> Self {
        self.wait_before_shuffle = before_lower;
        self.settle_before_shuffle = before_shuffle;
        self
    }

    #[must_use]
    pub fn with_points_per_correct(mut self, points: u32) -> Self {
        self.points_per_correct = points;
        self
    }

    /// Check every value the animations and round logic depend on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slots.len() < 2 {
            return Err(ConfigError::TooFewSlots(self.slots.len()));
        }
        if self.slots.len() > usize::from(u16::MAX) {
            return Err(ConfigError::TooManySlots(self.slots.len()));
        }
        if let Some(index) = self.slots.iter().position(|s| !s.is_finite()) {
            return Err(ConfigError::InvalidSlot { index });
        }

        positive("reveal_speed", self.reveal_speed)?;
        positive("shuffle_duration", self.shuffle_duration)?;
        positive("shuffle_speed", self.shuffle_speed)?;
        positive("snap_epsilon", self.snap_epsilon)?;

        finite("reveal_height", self.reveal_height)?;
        finite("arc_height", self.arc_height)?;

        non_negative("wait_before_shuffle", self.wait_before_shuffle)?;
        non_negative("settle_before_shuffle", self.settle_before_shuffle)?;

        Ok(())
    }
}

fn finite(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { name, value })
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_classic_layout() {
        let config = ShellGameConfig::default();

        assert_eq!(config.cup_count(), 3);
        assert_eq!(config.slots[0], Vec3::new(-2.0, 0.0, 0.0));
        assert_eq!(config.slots[2], Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(config.shuffle_count, 5);
        assert_eq!(config.points_per_correct, 10);
        assert_eq!(config.arc_axis, Axis::Z);
        assert_eq!(config.camera.position, Vec3::new(0.0, 5.0, -5.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = ShellGameConfig::default()
            .with_shuffle_count(2)
            .with_shuffle_timing(1.0, 2.0)
            .with_arc(0.5, Axis::Y)
            .with_reveal(2.0, 4.0)
            .with_pauses(1.0, 0.25)
            .with_points_per_correct(5);

        assert_eq!(config.shuffle_count, 2);
        assert_eq!(config.shuffle_duration, 1.0);
        assert_eq!(config.shuffle_speed, 2.0);
        assert_eq!(config.arc_axis, Axis::Y);
        assert_eq!(config.reveal_height, 2.0);
        assert_eq!(config.wait_before_shuffle, 1.0);
        assert_eq!(config.settle_before_shuffle, 0.25);
        assert_eq!(config.points_per_correct, 5);
    }

    #[test]
    fn test_too_few_slots() {
        let config = ShellGameConfig::default().with_slots(vec![Vec3::ZERO]);
        assert_eq!(config.validate(), Err(ConfigError::TooFewSlots(1)));
    }

    #[test]
    fn test_non_positive_duration() {
        let config = ShellGameConfig::default().with_shuffle_timing(0.0, 3.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive { name: "shuffle_duration", value: 0.0 })
        );
    }

    #[test]
    fn test_negative_pause() {
        let config = ShellGameConfig::default().with_pauses(-1.0, 0.5);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative { name: "wait_before_shuffle", .. })
        ));
    }

    #[test]
    fn test_non_finite_slot() {
        let config = ShellGameConfig::default()
            .with_slots(vec![Vec3::ZERO, Vec3::new(f32::NAN, 0.0, 0.0)]);
        assert_eq!(config.validate(), Err(ConfigError::InvalidSlot { index: 1 }));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ShellGameConfig =
            serde_json::from_str(r#"{ "shuffle_count": 9, "arc_axis": "Y" }"#).unwrap();

        assert_eq!(config.shuffle_count, 9);
        assert_eq!(config.arc_axis, Axis::Y);
        assert_eq!(config.reveal_speed, 5.0);
        assert_eq!(config.cup_count(), 3);
    }
}
