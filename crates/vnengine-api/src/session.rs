//! Live play sessions.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, TimeDelta, Utc};
use tracing::info;
use uuid::Uuid;
use vnengine_core::presentation::{Presenter, ScreenView};
use vnengine_navigator::Navigator;

use crate::error::ApiError;

/// Presenter that keeps only the most recent screen, for the HTTP layer to
/// return to the client.
#[derive(Debug, Clone, Default)]
pub struct LatestScreen {
    current: Option<ScreenView>,
}

impl LatestScreen {
    /// The last screen rendered.
    #[must_use]
    pub fn current(&self) -> Option<&ScreenView> {
        self.current.as_ref()
    }
}

impl Presenter for LatestScreen {
    fn render(&mut self, view: &ScreenView) {
        self.current = Some(view.clone());
    }
}

/// A navigator bound to a save slot.
pub struct PlaySession {
    /// The session's state machine.
    pub navigator: Navigator<LatestScreen>,
    /// Save slot the history is written to.
    pub slot: String,
    /// When the session was opened.
    pub created_at: DateTime<Utc>,
    /// When the session last received a request.
    pub last_active: DateTime<Utc>,
}

impl PlaySession {
    /// The screen as last rendered to the client.
    #[must_use]
    pub fn screen(&self) -> ScreenView {
        self.navigator
            .presenter()
            .current()
            .cloned()
            .unwrap_or_else(|| self.navigator.view())
    }
}

/// A session handle. Inputs to one session never wait on another.
pub type SharedSession = Arc<Mutex<PlaySession>>;

/// Locks one session.
///
/// # Errors
///
/// Returns `ApiError::Internal` if a request panicked while holding it.
pub fn lock_session(session: &SharedSession) -> Result<MutexGuard<'_, PlaySession>, ApiError> {
    session
        .lock()
        .map_err(|_| ApiError::Internal("session lock poisoned".into()))
}

/// Live sessions by id. A save slot belongs to at most one live session, so
/// no two players write the same save file.
#[derive(Default)]
pub struct SessionTable {
    sessions: HashMap<Uuid, SharedSession>,
    slots: HashMap<String, Uuid>,
}

impl SessionTable {
    /// Registers `session` under `session_id`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::SlotInUse` if another live session holds the
    /// session's slot.
    pub fn open(&mut self, session_id: Uuid, session: PlaySession) -> Result<(), ApiError> {
        if self.slots.contains_key(&session.slot) {
            return Err(ApiError::SlotInUse(session.slot));
        }
        self.slots.insert(session.slot.clone(), session_id);
        self.sessions.insert(session_id, Arc::new(Mutex::new(session)));
        Ok(())
    }

    /// The session with this id.
    #[must_use]
    pub fn get(&self, session_id: Uuid) -> Option<SharedSession> {
        self.sessions.get(&session_id).cloned()
    }

    /// Removes a session and releases its slot. Returns `false` if no such
    /// session was live.
    pub fn close(&mut self, session_id: Uuid) -> bool {
        if self.sessions.remove(&session_id).is_none() {
            return false;
        }
        self.slots.retain(|_, holder| *holder != session_id);
        true
    }

    /// Closes every session idle for longer than `timeout` as of `now`.
    /// Sessions busy with a request are left alone. Returns how many were
    /// closed.
    pub fn evict_idle(&mut self, now: DateTime<Utc>, timeout: TimeDelta) -> usize {
        let idle: Vec<Uuid> = self
            .sessions
            .iter()
            .filter(|(_, session)| {
                session
                    .try_lock()
                    .is_ok_and(|s| now - s.last_active > timeout)
            })
            .map(|(id, _)| *id)
            .collect();
        for session_id in &idle {
            self.close(*session_id);
            info!(%session_id, "idle play session evicted");
        }
        idle.len()
    }

    /// Number of live sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns `true` if no session is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
