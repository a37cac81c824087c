//! Error types.
//!
//! The game itself has no runtime failure modes: out-of-contract calls are
//! gated and ignored. The only fallible step is accepting a configuration.

/// Rejected configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("at least 2 cup slots are required, got {0}")]
    TooFewSlots(usize),

    #[error("{0} slots exceed the supported maximum of {max}", max = u16::MAX)]
    TooManySlots(usize),

    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f32 },

    #[error("{name} must be greater than zero, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },

    #[error("slot {index} has a non-finite position")]
    InvalidSlot { index: usize },
}
