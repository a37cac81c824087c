//! # shell-game
//!
//! An engine-agnostic shell game: cups are shuffled through animated
//! swaps, the player picks one, and score is tracked.
//!
//! ## Design Principles
//!
//! 1. **Host-Agnostic**: Rendering, picking and text display live behind
//!    the traits in `host`. The crate never depends on an engine.
//!
//! 2. **Explicit Animation State**: Every motion is data advanced by
//!    `GameDirector::update(dt)`. No coroutines, no hidden timers, so whole
//!    rounds are testable with a fixed-step loop.
//!
//! 3. **Owned Context**: The score lives in a `ScoreTracker` the host owns
//!    and lends to the director. There is no global state.
//!
//! ## Modules
//!
//! - `core`: Cup ids, vector math, RNG, configuration, errors
//! - `cups`: Per-cup reveal/lower motion and hover highlight
//! - `director`: Round lifecycle, shuffles, selection and scoring
//! - `score`: Score accumulation and display binding
//! - `host`: Boundary traits and the `Session` that wires them up

pub mod core;
pub mod cups;
pub mod director;
pub mod score;
pub mod host;

// Re-export commonly used types
pub use crate::core::{
    Axis, CameraPose, ConfigError, CupId, GameRng, GameRngState, ShellGameConfig, Vec3,
};

pub use crate::cups::{Cup, CupMotion, Highlight, InteractionGate, MotionKind};

pub use crate::director::{
    DirectorSnapshot, GameDirector, GameEvent, RoundPhase, RoundRecord,
};

pub use crate::score::ScoreTracker;

pub use crate::host::{
    InputEvent, InputSource, ObjectId, SceneHost, ScoreDisplay, Session, SpatialHandle,
};
