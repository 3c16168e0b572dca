//! Play-start setup check.
//!
//! A [`PlayableStory`] can only be obtained through [`PlayableStory::prepare`],
//! so holding one proves the language configuration, the assets and the
//! story graph were all checked before play.

use std::ops::Deref;

use tracing::{info, instrument};
use vnengine_core::assets::AssetLocator;
use vnengine_core::error::SetupError;

use crate::application::validation::ValidationReport;
use crate::domain::story::Story;

/// A story that passed every play-start check. Read-only from here on.
#[derive(Debug, Clone)]
pub struct PlayableStory {
    story: Story,
    report: ValidationReport,
}

impl PlayableStory {
    /// Checks `story` and freezes it for play.
    ///
    /// The initial language is checked first, then every scene background
    /// (and the starting background, if any), then the pathing.
    ///
    /// # Errors
    ///
    /// Returns `SetupError::LanguageNotAvailable`, `SetupError::MissingAsset`,
    /// `SetupError::MissingMenuBackground` or `SetupError::Invalid`.
    #[instrument(skip_all, fields(scenes = story.len()))]
    pub fn prepare(story: Story, assets: &dyn AssetLocator) -> Result<Self, SetupError> {
        if !story
            .languages()
            .iter()
            .any(|l| l == story.initial_language())
        {
            return Err(SetupError::LanguageNotAvailable {
                language: story.initial_language().to_owned(),
                available: story.languages().join(", "),
            });
        }

        if let Some(scene) = story.scenes().find(|s| !assets.exists(s.background())) {
            return Err(SetupError::MissingAsset {
                scene: scene.name().to_owned(),
                path: scene.background().to_owned(),
            });
        }

        if let Some(background) = story.starting_background() {
            if !assets.exists(background) {
                return Err(SetupError::MissingMenuBackground(background.to_owned()));
            }
        }

        let report = story.validate()?;
        info!(
            resolution = %story.resolution(),
            languages = story.languages().len(),
            "story ready for play"
        );

        Ok(Self { story, report })
    }

    /// Warnings collected during validation.
    #[must_use]
    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    /// The underlying story.
    #[must_use]
    pub fn story(&self) -> &Story {
        &self.story
    }
}

impl Deref for PlayableStory {
    type Target = Story;

    fn deref(&self) -> &Story {
        &self.story
    }
}
