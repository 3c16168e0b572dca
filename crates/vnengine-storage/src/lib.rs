//! VN Engine: Save storage.
//!
//! Histories are kept as one small text file per save slot, holding the
//! scene indices as a bracketed list such as `[0, 3, 7]`.

pub mod file_history_store;
pub mod save_directory;

pub use file_history_store::{FileHistoryStore, decode_history, encode_history};
pub use save_directory::SaveDirectory;
