//! Cup identification.
//!
//! A cup's identity is its index in the director's ordered cup list.
//! Shuffles move cups between slots but never change their ids, so the
//! hidden correct cup travels with the shuffle.
//!
//! ```
//! use shell_game::core::CupId;
//!
//! let cup = CupId::new(1);
//! assert_eq!(cup.index(), 1);
//! assert_eq!(cup.to_string(), "Cup(1)");
//! ```

use serde::{Deserialize, Serialize};

/// Index of a cup in `0..cup_count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CupId(pub u16);

impl CupId {
    /// Create a new cup ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Build from a slice index.
    ///
    /// # Panics
    ///
    /// Panics if `index` does not fit in a `u16`.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self(u16::try_from(index).expect("cup index out of range"))
    }

    /// Index into the cup list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cup({})", self.0)
    }
}
