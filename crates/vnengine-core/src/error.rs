//! Error taxonomy.
//!
//! Errors are grouped by the phase in which they surface: authoring (while the
//! story graph is being built), validation (once, before play), setup (once,
//! at play start), runtime collaborator failures (recoverable) and navigation
//! errors (programming mistakes in the front-end).

use thiserror::Error;

/// Raised while a story is being authored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthoringError {
    /// A choice was attached to a scene that does not exist.
    #[error("unknown scene: {0}")]
    UnknownScene(String),

    /// A scene name was added twice.
    #[error("scene {0} is already defined")]
    DuplicateScene(String),
}

/// Structural problems found by the pathing validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The story has no scenes at all.
    #[error("there are no scenes defined for the visual novel")]
    NoScenesDefined,

    /// A choice points to a scene name that was never added.
    #[error("scene {to} is not defined in the story (referenced by a choice in scene {from})")]
    DanglingReference {
        /// The scene owning the offending choice.
        from: String,
        /// The missing destination.
        to: String,
    },
}

/// Problems detected once, when a story is prepared for play.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// A scene background does not resolve to an existing asset.
    #[error("background {path} of scene {scene} was not found")]
    MissingAsset {
        /// The scene whose background is missing.
        scene: String,
        /// The unresolved asset reference.
        path: String,
    },

    /// The starting menu background does not resolve to an existing asset.
    #[error("starting background {0} was not found")]
    MissingMenuBackground(String),

    /// The initial language is not one of the configured languages.
    #[error("language {language} is not among the available languages ({available})")]
    LanguageNotAvailable {
        /// The configured initial language.
        language: String,
        /// Comma separated list of available languages.
        available: String,
    },

    /// The story graph failed validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Failures reported by a history store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Nothing has been saved yet.
    #[error("no saved history found")]
    NotFound,

    /// The underlying storage could not be read or written.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Saved data exists but cannot be decoded.
    #[error("saved history is corrupt: {0}")]
    Corrupt(String),
}

/// Failures reported by a translator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    /// The translator has no entry for the text in the target language.
    #[error("no {language} translation for {text:?}")]
    MissingEntry {
        /// Target language code.
        language: String,
        /// Source text.
        text: String,
    },

    /// The translation service could not be reached or answered badly.
    #[error("translation service unavailable: {0}")]
    Unavailable(String),
}

/// Inputs the navigator cannot apply. These indicate a front-end bug: the
/// presentation layer only emits inputs for controls it rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The input has no meaning on the current screen.
    #[error("input {input} is not accepted on the {screen} screen")]
    UnexpectedInput {
        /// Screen the navigator was on.
        screen: &'static str,
        /// Debug rendering of the rejected input.
        input: String,
    },

    /// A choice index outside the current scene's choices.
    #[error("choice {index} is out of range for scene {scene} ({available} choices)")]
    ChoiceOutOfRange {
        /// Scene being displayed.
        scene: String,
        /// Requested index.
        index: usize,
        /// Number of choices the scene has.
        available: usize,
    },

    /// A language index outside the configured languages.
    #[error("language {index} is out of range ({available} languages)")]
    LanguageOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of configured languages.
        available: usize,
    },

    /// The session was already terminated by Quit.
    #[error("the session has ended")]
    SessionEnded,
}
