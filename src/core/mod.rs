//! Core types: cup ids, vector math, RNG, configuration, errors.
//!
//! Nothing in here knows about rounds or animations; the `cups` and
//! `director` modules build on these.

pub mod cup_id;
pub mod math;
pub mod rng;
pub mod config;
pub mod error;

pub use cup_id::CupId;
pub use math::{Axis, Vec3};
pub use rng::{GameRng, GameRngState};
pub use config::{CameraPose, ShellGameConfig};
pub use error::ConfigError;
