//! Scenes and the choices leaving them.

use std::fmt;

/// Stable handle of a scene within its story: the number of scenes created
/// before it. Never reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SceneId(usize);

impl SceneId {
    /// The entry scene, i.e. the first scene added.
    pub const ENTRY: Self = Self(0);

    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// The creation index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The text shown to the player for one branching option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    label: String,
}

impl Choice {
    /// Creates a choice with the given label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// The label shown to the player.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// One unit of displayed story content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    name: String,
    narrative_text: String,
    background: String,
    id: SceneId,
    /// Outgoing edges keyed by destination name, in authored order.
    choices: Vec<(String, Choice)>,
}

impl Scene {
    pub(crate) fn new(
        name: String,
        narrative_text: String,
        background: String,
        id: SceneId,
    ) -> Self {
        Self {
            name,
            narrative_text,
            background,
            id,
            choices: Vec::new(),
        }
    }

    /// The scene name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The narrative text spoken in this scene.
    #[must_use]
    pub fn narrative_text(&self) -> &str {
        &self.narrative_text
    }

    /// Reference of the background image.
    #[must_use]
    pub fn background(&self) -> &str {
        &self.background
    }

    /// The scene handle.
    #[must_use]
    pub fn id(&self) -> SceneId {
        self.id
    }

    /// Choices as `(destination, choice)` pairs, in the order they are shown.
    pub fn choices(&self) -> impl Iterator<Item = (&str, &Choice)> {
        self.choices.iter().map(|(to, choice)| (to.as_str(), choice))
    }

    /// Destination names in choice order.
    pub fn destinations(&self) -> impl Iterator<Item = &str> {
        self.choices.iter().map(|(to, _)| to.as_str())
    }

    /// The `index`-th choice in display order.
    #[must_use]
    pub fn choice_at(&self, index: usize) -> Option<(&str, &Choice)> {
        self.choices
            .get(index)
            .map(|(to, choice)| (to.as_str(), choice))
    }

    /// Number of choices leaving this scene.
    #[must_use]
    pub fn choice_count(&self) -> usize {
        self.choices.len()
    }

    /// Inserts a choice towards `to`. A second choice towards the same
    /// destination replaces the label and keeps the original position.
    pub(crate) fn add_choice(&mut self, label: String, to: String) {
        if let Some((_, existing)) = self.choices.iter_mut().find(|(dest, _)| *dest == to) {
            *existing = Choice::new(label);
        } else {
            self.choices.push((to, Choice::new(label)));
        }
    }
}
