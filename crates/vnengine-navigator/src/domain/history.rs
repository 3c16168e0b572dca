//! Back-navigation history.

use thiserror::Error;
use vnengine_story::{SceneId, Story};

/// Why a saved history cannot be resumed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// The saved history has no entries.
    #[error("saved history is empty")]
    Empty,

    /// The saved history names a scene index the story does not have.
    #[error("saved history refers to scene #{0}, which the story does not define")]
    UnknownScene(usize),
}

/// The trail of visited scenes. The last entry is the scene on display.
///
/// A history is never empty: it starts at the entry scene and stepping back
/// stops there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History(Vec<SceneId>);

impl History {
    /// A fresh history positioned on the entry scene.
    #[must_use]
    pub fn new() -> Self {
        Self(vec![SceneId::ENTRY])
    }

    /// Rebuilds a history from saved scene indices, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::Empty` for an empty list and
    /// `HistoryError::UnknownScene` for an index outside `story`.
    pub fn restore(saved: &[usize], story: &Story) -> Result<Self, HistoryError> {
        if saved.is_empty() {
            return Err(HistoryError::Empty);
        }
        saved
            .iter()
            .map(|&index| story.scene_id(index).ok_or(HistoryError::UnknownScene(index)))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// The scene on display.
    #[must_use]
    pub fn top(&self) -> SceneId {
        *self.0.last().expect("history is never empty")
    }

    /// Moves forward to `scene`.
    pub fn push(&mut self, scene: SceneId) {
        self.0.push(scene);
    }

    /// Steps back one scene. Returns `false`, leaving the history untouched,
    /// when already at its first entry.
    pub fn back(&mut self) -> bool {
        if self.0.len() > 1 {
            self.0.pop();
            true
        } else {
            false
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Scene indices, oldest first, in the form persisted by history stores.
    #[must_use]
    pub fn indices(&self) -> Vec<usize> {
        self.0.iter().map(|id| id.index()).collect()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
