//! Screens and player inputs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The screen the navigator is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Main menu. The first screen of every session.
    Start,
    /// Scene display.
    Game,
    /// Branch selection for the displayed scene.
    Choice,
    /// Language picker.
    Language,
}

impl Screen {
    /// Lower-case screen name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Game => "game",
            Self::Choice => "choice",
            Self::Language => "language",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A discrete event reported by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlayerInput {
    /// Start menu: begin from the entry scene.
    NewGame,
    /// Start menu: resume the saved history.
    Continue,
    /// Start menu: open the language picker.
    OpenLanguages,
    /// Start menu: end the session.
    Quit,
    /// Game or choice screen: return to the start menu.
    Menu,
    /// Game or choice screen: step back one scene.
    Back,
    /// Game screen: a click outside the menu and back controls.
    Advance,
    /// Choice screen: take the choice at `index`, in display order.
    SelectChoice {
        /// Zero-based choice position.
        index: usize,
    },
    /// Language picker: switch to the language at `index`.
    SelectLanguage {
        /// Zero-based language position.
        index: usize,
    },
    /// Pointer motion, for hover feedback only.
    PointerMoved {
        /// Horizontal position in pixels.
        x: i32,
        /// Vertical position in pixels.
        y: i32,
    },
}

/// Whether the session continues after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading inputs.
    Continue,
    /// The player quit; no further input is accepted.
    Quit,
}
