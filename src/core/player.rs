//! Player identification.
//!
//! Ownership of a world is an `Option<PlayerId>`: `None` is the unowned
//! sentinel, so no real player can ever compare equal to it.

use serde::{Deserialize, Serialize};

/// Player identifier supporting 1-255 players.
///
/// The default player is `PlayerId(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self(1)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}
