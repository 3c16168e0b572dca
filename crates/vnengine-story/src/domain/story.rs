//! The story graph and its global configuration.

use std::collections::HashMap;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use vnengine_core::error::AuthoringError;

use super::scene::{Scene, SceneId};

/// Target screen resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// 1280×720.
    #[default]
    #[serde(rename = "hd")]
    Hd,
    /// 1920×1080.
    #[serde(rename = "fullhd")]
    FullHd,
    /// 3840×2160.
    #[serde(rename = "4k")]
    UltraHd,
}

impl Resolution {
    /// Width and height in pixels.
    #[must_use]
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Self::Hd => (1280, 720),
            Self::FullHd => (1920, 1080),
            Self::UltraHd => (3840, 2160),
        }
    }

    /// The name used in manifests and configuration.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hd => "hd",
            Self::FullHd => "fullhd",
            Self::UltraHd => "4k",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a resolution name is not one of `hd`, `fullhd`, `4k`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown resolution {0:?}; expected hd, fullhd or 4k")]
pub struct ParseResolutionError(String);

impl FromStr for Resolution {
    type Err = ParseResolutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hd" => Ok(Self::Hd),
            "fullhd" => Ok(Self::FullHd),
            "4k" => Ok(Self::UltraHd),
            _ => Err(ParseResolutionError(s.to_owned())),
        }
    }
}

/// A branching narrative: scenes joined by labeled choices, plus the global
/// presentation configuration.
///
/// Scenes are stored in creation order and addressed by [`SceneId`]; the
/// name table maps each name to its handle. Choices refer to their
/// destinations by name, so forward references are allowed while authoring
/// and are checked by [`Story::validate`].
#[derive(Debug, Clone)]
pub struct Story {
    scenes: Vec<Scene>,
    ids: HashMap<String, SceneId>,
    languages: Vec<String>,
    initial_language: String,
    resolution: Resolution,
    starting_background: Option<String>,
}

impl Default for Story {
    fn default() -> Self {
        Self {
            scenes: Vec::new(),
            ids: HashMap::new(),
            languages: vec!["pt".to_owned(), "en".to_owned()],
            initial_language: "pt".to_owned(),
            resolution: Resolution::Hd,
            starting_background: None,
        }
    }
}

impl Story {
    /// Creates an empty story with the default configuration: languages
    /// `pt` and `en`, initial language `pt`, `hd` resolution.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a scene and returns its handle.
    ///
    /// # Errors
    ///
    /// Returns `AuthoringError::DuplicateScene` if a scene with this name
    /// already exists.
    pub fn add_scene(
        &mut self,
        name: impl Into<String>,
        narrative_text: impl Into<String>,
        background: impl Into<String>,
    ) -> Result<SceneId, AuthoringError> {
        let name = name.into();
        if self.ids.contains_key(&name) {
            return Err(AuthoringError::DuplicateScene(name));
        }

        let id = SceneId::new(self.scenes.len());
        debug!(scene = %name, %id, "scene added");
        self.ids.insert(name.clone(), id);
        let scene = Scene::new(name, narrative_text.into(), background.into(), id);
        self.scenes.push(scene);
        Ok(id)
    }

    /// Adds a choice from scene `from` to scene `to`. The destination does
    /// not need to exist yet.
    ///
    /// # Errors
    ///
    /// Returns `AuthoringError::UnknownScene` if `from` is not a scene.
    pub fn add_choice(
        &mut self,
        from: &str,
        label: impl Into<String>,
        to: impl Into<String>,
    ) -> Result<(), AuthoringError> {
        let id = self
            .id_of(from)
            .ok_or_else(|| AuthoringError::UnknownScene(from.to_owned()))?;
        self.scenes[id.index()].add_choice(label.into(), to.into());
        Ok(())
    }

    /// Sets the languages offered in the language picker.
    pub fn set_languages<I, S>(&mut self, languages: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
    }

    /// Sets the language a new session starts in.
    pub fn set_initial_language(&mut self, language: impl Into<String>) {
        self.initial_language = language.into();
    }

    /// Sets the target resolution.
    pub fn set_resolution(&mut self, resolution: Resolution) {
        self.resolution = resolution;
    }

    /// Sets the background of the main menu and language picker.
    pub fn set_starting_background(&mut self, path: impl Into<String>) {
        self.starting_background = Some(path.into());
    }

    /// Configured languages, in picker order.
    #[must_use]
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// The language a new session starts in.
    #[must_use]
    pub fn initial_language(&self) -> &str {
        &self.initial_language
    }

    /// The target resolution.
    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// The main menu background, if one was set.
    #[must_use]
    pub fn starting_background(&self) -> Option<&str> {
        self.starting_background.as_deref()
    }

    /// Number of scenes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Returns `true` if no scene was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Handle of the scene named `name`.
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<SceneId> {
        self.ids.get(name).copied()
    }

    /// Handle of the scene created at position `index`.
    #[must_use]
    pub fn scene_id(&self, index: usize) -> Option<SceneId> {
        (index < self.scenes.len()).then(|| SceneId::new(index))
    }

    /// The scene with handle `id`.
    #[must_use]
    pub fn scene(&self, id: SceneId) -> Option<&Scene> {
        self.scenes.get(id.index())
    }

    /// The scene named `name`.
    #[must_use]
    pub fn scene_by_name(&self, name: &str) -> Option<&Scene> {
        self.id_of(name).map(|id| &self.scenes[id.index()])
    }

    /// Scenes in creation order.
    pub fn scenes(&self) -> impl Iterator<Item = &Scene> {
        self.scenes.iter()
    }

    /// Scene names in creation order.
    pub fn scene_names(&self) -> impl Iterator<Item = &str> {
        self.scenes.iter().map(Scene::name)
    }
}

impl Index<SceneId> for Story {
    type Output = Scene;

    /// # Panics
    ///
    /// Panics if `id` was not issued by this story.
    fn index(&self, id: SceneId) -> &Scene {
        &self.scenes[id.index()]
    }
}
