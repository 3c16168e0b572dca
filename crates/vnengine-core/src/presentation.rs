//! Presentation contract.
//!
//! The navigator hands the presenter everything needed to draw a screen:
//! display strings are already translated and choices are already ordered.
//! The presenter owns no narrative state.

use serde::Serialize;

/// One screen, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum ScreenView {
    /// Main menu.
    Start(MenuView),
    /// Scene display.
    Game(SceneView),
    /// Scene display with the branch options on top.
    Choice(ChoiceView),
    /// Language picker.
    Language(LanguageView),
}

impl ScreenView {
    /// Short screen name, matching the serialized tag.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start(_) => "start",
            Self::Game(_) => "game",
            Self::Choice(_) => "choice",
            Self::Language(_) => "language",
        }
    }

    /// The user-visible notice attached to this screen, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        match self {
            Self::Start(menu) => menu.notice.as_deref(),
            Self::Game(scene) => scene.notice.as_deref(),
            Self::Choice(choice) => choice.scene.notice.as_deref(),
            Self::Language(_) => None,
        }
    }
}

/// The main menu: New Game, Continue, Language, Quit (in that order).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuView {
    /// Starting background image reference.
    pub background: Option<String>,
    /// Translated option labels.
    pub options: Vec<String>,
    /// Message for the player, e.g. after a failed Continue.
    pub notice: Option<String>,
}

/// A scene as displayed in the game screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneView {
    /// Scene name, shown as the title.
    pub title: String,
    /// Translated narrative text.
    pub text: String,
    /// Background image reference.
    pub background: String,
    /// Translated menu/back controls.
    pub controls: SceneControls,
    /// Message for the player, e.g. after a failed save.
    pub notice: Option<String>,
}

/// Labels of the two controls shown on every scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneControls {
    /// Returns to the main menu.
    pub menu: String,
    /// Steps back one scene.
    pub back: String,
}

/// A scene with its branch options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceView {
    /// The scene the choices belong to.
    #[serde(flatten)]
    pub scene: SceneView,
    /// Translated choice labels in authored order.
    pub choices: Vec<String>,
}

/// The language picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageView {
    /// Starting background image reference.
    pub background: Option<String>,
    /// Selectable languages in configured order.
    pub languages: Vec<LanguageOption>,
}

/// One selectable language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    /// Language code.
    pub code: String,
    /// Native display name.
    pub name: String,
}

/// Draws screens.
pub trait Presenter: Send {
    /// Render `view`. Called once every time a screen is entered or redrawn.
    fn render(&mut self, view: &ScreenView);
}
