//! Persistence abstraction for the navigation history.
//!
//! The navigator writes its history stack (scene indices, oldest first) on
//! every push and pop, and reads it back when the player continues a game.
//! Calls are synchronous: a transition is not complete until the store has
//! answered.

use crate::error::StoreError;

/// Storage for one saved navigation history.
pub trait HistoryStore: Send + Sync {
    /// Replace the saved history.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the history cannot be written.
    fn save(&self, history: &[usize]) -> Result<(), StoreError>;

    /// Load the saved history.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if nothing was saved yet,
    /// `StoreError::Corrupt` if the saved data cannot be decoded, and
    /// `StoreError::Io` for storage failures.
    fn load(&self) -> Result<Vec<usize>, StoreError>;
}

/// A family of named save slots, each backed by its own `HistoryStore`.
pub trait SaveSlots: Send + Sync {
    /// Open the store for `slot`. Opening never touches storage; failures
    /// surface on the first `save` or `load`.
    fn open(&self, slot: &str) -> Box<dyn HistoryStore>;
}

/// Returns `true` if `slot` is usable as a save-slot name: non-empty, at
/// most 64 characters, ASCII alphanumerics, `-` and `_` only.
#[must_use]
pub fn is_valid_slot_name(slot: &str) -> bool {
    !slot.is_empty()
        && slot.len() <= 64
        && slot
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
