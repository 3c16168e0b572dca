//! Test presenter: records every rendered screen.

use vnengine_core::presentation::{Presenter, ScreenView};

/// A presenter that keeps every view it was asked to render.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    rendered: Vec<ScreenView>,
}

impl RecordingPresenter {
    /// Create a presenter with nothing rendered yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All rendered views, oldest first.
    #[must_use]
    pub fn rendered(&self) -> &[ScreenView] {
        &self.rendered
    }

    /// The most recently rendered view.
    #[must_use]
    pub fn last(&self) -> Option<&ScreenView> {
        self.rendered.last()
    }
}

impl Presenter for RecordingPresenter {
    fn render(&mut self, view: &ScreenView) {
        self.rendered.push(view.clone());
    }
}
