//! Shared test fakes and utilities for the visual novel engine.

mod assets;
mod clock;
mod presenter;
mod store;
mod translator;

pub use assets::InMemoryAssets;
pub use clock::FixedClock;
pub use presenter::RecordingPresenter;
pub use store::{FailingHistoryStore, InMemoryHistoryStore, InMemorySaveSlots};
pub use translator::FailingTranslator;
