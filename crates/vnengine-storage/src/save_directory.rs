//! Save slots as files in one directory.

use std::path::{Path, PathBuf};

use tracing::debug;
use vnengine_core::persistence::{HistoryStore, SaveSlots, is_valid_slot_name};

use crate::file_history_store::FileHistoryStore;

/// A directory holding one `<slot>.txt` save file per slot.
#[derive(Debug, Clone)]
pub struct SaveDirectory {
    root: PathBuf,
}

impl SaveDirectory {
    /// Uses `root` for save files. The directory is created on first save.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory holding the save files.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The file backing `slot`.
    #[must_use]
    pub fn slot_path(&self, slot: &str) -> PathBuf {
        debug_assert!(is_valid_slot_name(slot), "invalid slot name {slot:?}");
        self.root.join(format!("{slot}.txt"))
    }
}

impl SaveSlots for SaveDirectory {
    fn open(&self, slot: &str) -> Box<dyn HistoryStore> {
        let path = self.slot_path(slot);
        debug!(slot, path = %path.display(), "save slot opened");
        Box::new(FileHistoryStore::new(path))
    }
}
