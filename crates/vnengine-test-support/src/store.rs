//! Test stores: fake `HistoryStore` and `SaveSlots` implementations.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use vnengine_core::error::StoreError;
use vnengine_core::persistence::{HistoryStore, SaveSlots};

#[derive(Debug, Default)]
struct Slot {
    saved: Option<Vec<usize>>,
    writes: usize,
}

/// A history store kept in memory. Clones share the same slot, so a test can
/// keep a handle while the navigator owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistoryStore {
    slot: Arc<Mutex<Slot>>,
}

impl InMemoryHistoryStore {
    /// Create an empty store; `load` returns `StoreError::NotFound`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `history`.
    #[must_use]
    pub fn with_saved(history: Vec<usize>) -> Self {
        let store = Self::default();
        store.slot.lock().unwrap().saved = Some(history);
        store
    }

    /// The currently saved history.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn saved(&self) -> Option<Vec<usize>> {
        self.slot.lock().unwrap().saved.clone()
    }

    /// How many times `save` was called.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.slot.lock().unwrap().writes
    }
}

impl HistoryStore for InMemoryHistoryStore {
    fn save(&self, history: &[usize]) -> Result<(), StoreError> {
        let mut slot = self.slot.lock().unwrap();
        slot.saved = Some(history.to_vec());
        slot.writes += 1;
        Ok(())
    }

    fn load(&self) -> Result<Vec<usize>, StoreError> {
        self.slot
            .lock()
            .unwrap()
            .saved
            .clone()
            .ok_or(StoreError::NotFound)
    }
}

/// A history store whose storage is always broken. Useful for testing
/// error-handling paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingHistoryStore;

impl HistoryStore for FailingHistoryStore {
    fn save(&self, _history: &[usize]) -> Result<(), StoreError> {
        Err(StoreError::Io(std::io::Error::other("disk full")))
    }

    fn load(&self) -> Result<Vec<usize>, StoreError> {
        Err(StoreError::Io(std::io::Error::other("disk unreadable")))
    }
}

/// Save slots kept in memory. Opening the same slot twice yields stores that
/// share their contents.
#[derive(Debug, Clone, Default)]
pub struct InMemorySaveSlots {
    slots: Arc<Mutex<HashMap<String, InMemoryHistoryStore>>>,
}

impl InMemorySaveSlots {
    /// Create slots with nothing saved.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle on `slot`, created empty if needed.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn slot(&self, slot: &str) -> InMemoryHistoryStore {
        self.slots
            .lock()
            .unwrap()
            .entry(slot.to_owned())
            .or_default()
            .clone()
    }
}

impl SaveSlots for InMemorySaveSlots {
    fn open(&self, slot: &str) -> Box<dyn HistoryStore> {
        Box::new(self.slot(slot))
    }
}
