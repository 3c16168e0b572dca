//! File implementation of the `HistoryStore` trait.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use vnengine_core::error::StoreError;
use vnengine_core::persistence::HistoryStore;

/// Renders a history as `[0, 3, 7]`.
#[must_use]
pub fn encode_history(history: &[usize]) -> String {
    let indices: Vec<String> = history.iter().map(ToString::to_string).collect();
    format!("[{}]", indices.join(", "))
}

/// Parses a saved history. Any JSON array of non-negative integers is
/// accepted, whatever its spacing.
///
/// # Errors
///
/// Returns `StoreError::Corrupt` if `text` is not such an array.
pub fn decode_history(text: &str) -> Result<Vec<usize>, StoreError> {
    serde_json::from_str(text.trim()).map_err(|e| StoreError::Corrupt(e.to_string()))
}

/// History store backed by a single file.
///
/// Writes go to a sibling temporary file that is then renamed over the
/// target, so a crash mid-write leaves the previous save intact.
#[derive(Debug, Clone)]
pub struct FileHistoryStore {
    path: PathBuf,
}

impl FileHistoryStore {
    /// Creates a store for the file at `path`. Nothing is touched until the
    /// first `save` or `load`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The save file location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl HistoryStore for FileHistoryStore {
    fn save(&self, history: &[usize]) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let temp = self.temp_path();
        fs::write(&temp, encode_history(history))?;
        fs::rename(&temp, &self.path)?;
        debug!(path = %self.path.display(), depth = history.len(), "history written");
        Ok(())
    }

    fn load(&self) -> Result<Vec<usize>, StoreError> {
        let text = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound,
            _ => StoreError::Io(e),
        })?;
        decode_history(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_matches_save_file_layout() {
        assert_eq!(encode_history(&[0, 3, 7]), "[0, 3, 7]");
        assert_eq!(encode_history(&[0]), "[0]");
        assert_eq!(encode_history(&[]), "[]");
    }

    #[test]
    fn test_decode_accepts_any_spacing() {
        assert_eq!(decode_history("[0,3,7]").unwrap(), [0, 3, 7]);
        assert_eq!(decode_history("  [ 0 ,\n 3 ]\n").unwrap(), [0, 3]);
    }

    #[test]
    fn test_decode_rejects_non_integer_lists() {
        for text in ["", "0, 3", "[0, -1]", "[\"A\"]", "{}"] {
            assert!(
                matches!(decode_history(text), Err(StoreError::Corrupt(_))),
                "{text:?} should be corrupt"
            );
        }
    }

    #[test]
    fn test_temp_file_sits_next_to_target() {
        let store = FileHistoryStore::new("saves/default.txt");

        assert_eq!(store.temp_path(), PathBuf::from("saves/default.txt.tmp"));
    }
}
