//! YAML story manifests.
//!
//! A manifest lists the configuration, the scenes with their outgoing
//! choices, and optional translation tables. Building a story from it adds
//! every scene first and every choice second, so choices may name scenes
//! declared further down the file.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;
use vnengine_core::error::AuthoringError;
use vnengine_core::translation::CatalogTranslator;

use crate::domain::story::{Resolution, Story};

/// Errors raised while loading a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("cannot read manifest: {0}")]
    Io(#[from] std::io::Error),

    /// The manifest is not valid YAML or has the wrong shape.
    #[error("invalid manifest: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The manifest describes an inconsistent story.
    #[error(transparent)]
    Authoring(#[from] AuthoringError),
}

/// Top-level manifest document.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoryManifest {
    /// Languages offered in the picker; defaults to `pt`, `en`.
    #[serde(default)]
    pub languages: Option<Vec<String>>,
    /// Language a new session starts in; defaults to `pt`.
    #[serde(default)]
    pub initial_language: Option<String>,
    /// Target resolution; defaults to `hd`.
    #[serde(default)]
    pub resolution: Option<Resolution>,
    /// Main menu background.
    #[serde(default)]
    pub starting_background: Option<String>,
    /// Scenes in creation order. The first one is the entry scene.
    pub scenes: Vec<SceneEntry>,
    /// Translation tables: language, then source text, then translation.
    #[serde(default)]
    pub translations: CatalogTranslator,
}

/// One scene in a manifest.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneEntry {
    /// Scene name.
    pub name: String,
    /// Narrative text.
    pub text: String,
    /// Background image reference.
    pub background: String,
    /// Outgoing choices in display order.
    #[serde(default)]
    pub choices: Vec<ChoiceEntry>,
}

/// One choice in a manifest.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChoiceEntry {
    /// Label shown to the player.
    pub label: String,
    /// Destination scene name.
    pub to: String,
}

/// A story built from a manifest, with its translation tables.
#[derive(Debug, Clone)]
pub struct AuthoredStory {
    /// The story graph.
    pub story: Story,
    /// Translations for narrative text, choice labels and menu strings.
    pub translations: CatalogTranslator,
}

impl StoryManifest {
    /// Parses a manifest from YAML text.
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::Parse` if the text is not a valid manifest.
    pub fn from_yaml(text: &str) -> Result<Self, ManifestError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Reads and parses a manifest file.
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::Io` if the file cannot be read and
    /// `ManifestError::Parse` if it is not a valid manifest.
    pub fn from_path(path: &Path) -> Result<Self, ManifestError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Builds the story the manifest describes.
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::Authoring` if two scenes share a name.
    pub fn into_story(self) -> Result<AuthoredStory, ManifestError> {
        let mut story = Story::new();
        if let Some(languages) = self.languages {
            story.set_languages(languages);
        }
        if let Some(language) = self.initial_language {
            story.set_initial_language(language);
        }
        if let Some(resolution) = self.resolution {
            story.set_resolution(resolution);
        }
        if let Some(background) = self.starting_background {
            story.set_starting_background(background);
        }

        let mut edges = Vec::new();
        for scene in self.scenes {
            story.add_scene(scene.name.clone(), scene.text, scene.background)?;
            edges.extend(scene.choices.into_iter().map(|c| (scene.name.clone(), c)));
        }
        for (from, choice) in edges {
            story.add_choice(&from, choice.label, choice.to)?;
        }

        info!(
            scenes = story.len(),
            translations = self.translations.len(),
            "story manifest loaded"
        );

        Ok(AuthoredStory {
            story,
            translations: self.translations,
        })
    }
}
