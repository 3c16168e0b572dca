//! Shared application state.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::TimeDelta;
use tracing::info;
use vnengine_core::assets::DirectoryAssets;
use vnengine_core::clock::{Clock, SystemClock};
use vnengine_core::persistence::SaveSlots;
use vnengine_core::translation::Translator;
use vnengine_storage::SaveDirectory;
use vnengine_story::PlayableStory;
use vnengine_story::application::manifest::StoryManifest;

use crate::config::ServerConfig;
use crate::error::{ApiError, AppError};
use crate::session::SessionTable;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The story every session plays.
    pub story: Arc<PlayableStory>,
    /// Translator for display strings.
    pub translator: Arc<dyn Translator>,
    /// Where session histories are saved.
    pub save_slots: Arc<dyn SaveSlots>,
    /// Clock for session timestamps.
    pub clock: Arc<dyn Clock>,
    /// Sessions without a request for this long are closed.
    pub idle_timeout: TimeDelta,
    sessions: Arc<Mutex<SessionTable>>,
}

/// Idle timeout in seconds used unless configured otherwise.
pub const DEFAULT_IDLE_SECS: i64 = 30 * 60;

impl AppState {
    /// Create new application state with no open sessions and the default
    /// idle timeout.
    #[must_use]
    pub fn new(
        story: Arc<PlayableStory>,
        translator: Arc<dyn Translator>,
        save_slots: Arc<dyn SaveSlots>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            story,
            translator,
            save_slots,
            clock,
            idle_timeout: TimeDelta::seconds(DEFAULT_IDLE_SECS),
            sessions: Arc::new(Mutex::new(SessionTable::default())),
        }
    }

    /// Replaces the idle timeout.
    #[must_use]
    pub fn with_idle_timeout(mut self, idle_timeout: TimeDelta) -> Self {
        self.idle_timeout = idle_timeout;
        self
    }

    /// Loads the manifest named by `config`, applies the overrides, runs the
    /// play-start check and wires file-backed saves.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Manifest` if the manifest cannot be loaded and
    /// `AppError::Setup` if the story is not playable.
    pub fn load(config: &ServerConfig) -> Result<Self, AppError> {
        let authored = StoryManifest::from_path(&config.story_path)?.into_story()?;
        let mut story = authored.story;
        config.apply_overrides(&mut story);

        let assets = DirectoryAssets::new(&config.asset_root);
        let story = PlayableStory::prepare(story, &assets)?;
        info!(
            story = %config.story_path.display(),
            scenes = story.len(),
            unreachable = story.report().unreachable.len(),
            save_dir = %config.save_dir.display(),
            "story loaded"
        );

        Ok(Self::new(
            Arc::new(story),
            Arc::new(authored.translations),
            Arc::new(SaveDirectory::new(&config.save_dir)),
            Arc::new(SystemClock),
        )
        .with_idle_timeout(config.idle_timeout))
    }

    /// Locks the session table.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Internal` if a handler panicked while holding the
    /// lock.
    pub fn sessions(&self) -> Result<MutexGuard<'_, SessionTable>, ApiError> {
        self.sessions
            .lock()
            .map_err(|_| ApiError::Internal("session table lock poisoned".into()))
    }
}
