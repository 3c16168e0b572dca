//! The play-session state machine.
//!
//! A [`Navigator`] reads one [`PlayerInput`] at a time, applies the
//! transition for the current screen, persists the history whenever it grows
//! or shrinks, and asks the presenter to draw the screen it lands on.
//!
//! | Screen   | Input            | Effect                          | Next     |
//! |----------|------------------|---------------------------------|----------|
//! | Start    | `NewGame`        | history := [entry], persist     | Game     |
//! | Start    | `Continue`       | load history                    | Game     |
//! | Start    | `OpenLanguages`  |                                 | Language |
//! | Start    | `Quit`           | end session                     |          |
//! | Game     | `Menu`           |                                 | Start    |
//! | Game     | `Back`           | pop if len > 1, persist         | Game     |
//! | Game     | `Advance`        |                                 | Choice   |
//! | Choice   | `SelectChoice`   | push destination, persist       | Game     |
//! | Choice   | `Menu`           |                                 | Start    |
//! | Choice   | `Back`           | pop if len > 1, persist         | Game     |
//! | Language | `SelectLanguage` | switch language                 | Start    |

use std::sync::Arc;

use tracing::{debug, error, info, trace, warn};
use vnengine_core::error::{NavigationError, StoreError};
use vnengine_core::persistence::HistoryStore;
use vnengine_core::presentation::{
    ChoiceView, LanguageOption, LanguageView, MenuView, Presenter, SceneControls, SceneView,
    ScreenView,
};
use vnengine_core::translation::{Translator, language_display_name};
use vnengine_story::{PlayableStory, Scene, SceneId};

use crate::domain::history::History;
use crate::domain::input::{Flow, PlayerInput, Screen};

const NEW_GAME: &str = "New Game";
const CONTINUE: &str = "Continue";
const LANGUAGE: &str = "Language";
const QUIT: &str = "Quit";
const MENU: &str = "Menu";
const BACK: &str = "Back";

const NO_SAVED_GAME: &str = "No saved game found";
const SAVE_UNREADABLE: &str = "The saved game could not be loaded";
const SAVE_FAILED: &str = "Progress could not be saved";

/// Screen plus the history it needs. The history only exists while a scene
/// is on display, so game and choice screens can never lack one.
#[derive(Debug, Clone)]
enum State {
    Start,
    Language,
    Game(History),
    Choice(History),
}

impl State {
    fn screen(&self) -> Screen {
        match self {
            Self::Start => Screen::Start,
            Self::Language => Screen::Language,
            Self::Game(_) => Screen::Game,
            Self::Choice(_) => Screen::Choice,
        }
    }
}

/// Outcome of a legal transition.
enum Step {
    Enter {
        state: State,
        notice: Option<&'static str>,
    },
    ChangeLanguage(String),
    Quit,
}

impl Step {
    fn enter(state: State, notice: Option<&'static str>) -> Self {
        Self::Enter { state, notice }
    }
}

/// Drives one play session over a prepared story.
pub struct Navigator<P: Presenter> {
    story: Arc<PlayableStory>,
    store: Box<dyn HistoryStore>,
    translator: Arc<dyn Translator>,
    presenter: P,
    state: State,
    language: String,
    /// Source text of the message shown on the current screen.
    notice: Option<&'static str>,
    finished: bool,
}

impl<P: Presenter> Navigator<P> {
    /// Opens a session on the start screen, in the story's initial language,
    /// and renders it.
    pub fn new(
        story: Arc<PlayableStory>,
        store: Box<dyn HistoryStore>,
        translator: Arc<dyn Translator>,
        presenter: P,
    ) -> Self {
        let language = story.initial_language().to_owned();
        let mut navigator = Self {
            story,
            store,
            translator,
            presenter,
            state: State::Start,
            language,
            notice: None,
            finished: false,
        };
        info!(language = %navigator.language, "navigation session opened");
        navigator.render();
        navigator
    }

    /// Applies one input.
    ///
    /// Pointer motion is accepted on every screen and changes nothing.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError` if the input does not belong to the current
    /// screen, names a choice or language that does not exist, or arrives
    /// after the session ended. The session state is unchanged in that case.
    pub fn handle(&mut self, input: PlayerInput) -> Result<Flow, NavigationError> {
        if self.finished {
            return Err(NavigationError::SessionEnded);
        }
        if let PlayerInput::PointerMoved { x, y } = input {
            trace!(x, y, "pointer moved");
            return Ok(Flow::Continue);
        }

        let from = self.state.screen();
        let step = self
            .transition(self.state.clone(), input)
            .inspect_err(|e| error!(screen = %from, ?input, error = %e, "input rejected"))?;

        match step {
            Step::Enter { state, notice } => {
                self.state = state;
                self.notice = notice;
            }
            Step::ChangeLanguage(language) => {
                info!(from = %self.language, to = %language, "language changed");
                self.language = language;
                self.state = State::Start;
                self.notice = None;
            }
            Step::Quit => {
                self.finished = true;
                info!("navigation session ended");
                return Ok(Flow::Quit);
            }
        }

        debug!(from = %from, to = %self.state.screen(), ?input, "transition");
        self.render();
        Ok(Flow::Continue)
    }

    /// Applies inputs in order until the player quits or the inputs run out.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first `NavigationError`.
    pub fn run<I>(&mut self, inputs: I) -> Result<Flow, NavigationError>
    where
        I: IntoIterator<Item = PlayerInput>,
    {
        for input in inputs {
            if self.handle(input)? == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    /// The current screen.
    #[must_use]
    pub fn screen(&self) -> Screen {
        self.state.screen()
    }

    /// The history while a scene is on display.
    #[must_use]
    pub fn history(&self) -> Option<&History> {
        match &self.state {
            State::Game(history) | State::Choice(history) => Some(history),
            State::Start | State::Language => None,
        }
    }

    /// The scene on display, if any.
    #[must_use]
    pub fn current_scene(&self) -> Option<&Scene> {
        self.history().map(|h| &self.story[h.top()])
    }

    /// The active display language.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns `true` once the player has quit.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The presenter receiving rendered screens.
    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// The current screen as the presenter last received it.
    #[must_use]
    pub fn view(&self) -> ScreenView {
        match &self.state {
            State::Start => ScreenView::Start(MenuView {
                background: self.story.starting_background().map(str::to_owned),
                options: [NEW_GAME, CONTINUE, LANGUAGE, QUIT]
                    .iter()
                    .map(|label| self.tr(label))
                    .collect(),
                notice: self.notice.map(|n| self.tr(n)),
            }),
            State::Game(history) => ScreenView::Game(self.scene_view(history.top())),
            State::Choice(history) => {
                let scene = &self.story[history.top()];
                ScreenView::Choice(ChoiceView {
                    scene: self.scene_view(history.top()),
                    choices: scene.choices().map(|(_, c)| self.tr(c.label())).collect(),
                })
            }
            State::Language => ScreenView::Language(LanguageView {
                background: self.story.starting_background().map(str::to_owned),
                languages: self
                    .story
                    .languages()
                    .iter()
                    .map(|code| LanguageOption {
                        code: code.clone(),
                        name: language_display_name(code).to_owned(),
                    })
                    .collect(),
            }),
        }
    }

    fn transition(&self, state: State, input: PlayerInput) -> Result<Step, NavigationError> {
        match (state, input) {
            (State::Start, PlayerInput::NewGame) => {
                let history = History::new();
                let notice = self.persist(&history);
                info!("new game started");
                Ok(Step::enter(State::Game(history), notice))
            }
            (State::Start, PlayerInput::Continue) => Ok(match self.resume() {
                Ok(history) => {
                    info!(depth = history.len(), "saved game resumed");
                    Step::enter(State::Game(history), None)
                }
                Err(notice) => Step::enter(State::Start, Some(notice)),
            }),
            (State::Start, PlayerInput::OpenLanguages) => Ok(Step::enter(State::Language, None)),
            (State::Start, PlayerInput::Quit) => Ok(Step::Quit),
            (State::Game(_) | State::Choice(_), PlayerInput::Menu) => {
                Ok(Step::enter(State::Start, None))
            }
            (State::Game(mut history) | State::Choice(mut history), PlayerInput::Back) => {
                let notice = if history.back() {
                    self.persist(&history)
                } else {
                    None
                };
                Ok(Step::enter(State::Game(history), notice))
            }
            (State::Game(history), PlayerInput::Advance) => {
                Ok(Step::enter(State::Choice(history), None))
            }
            (State::Choice(mut history), PlayerInput::SelectChoice { index }) => {
                let next = self.destination(history.top(), index)?;
                history.push(next);
                let notice = self.persist(&history);
                Ok(Step::enter(State::Game(history), notice))
            }
            (State::Language, PlayerInput::SelectLanguage { index }) => self
                .story
                .languages()
                .get(index)
                .cloned()
                .map(Step::ChangeLanguage)
                .ok_or(NavigationError::LanguageOutOfRange {
                    index,
                    available: self.story.languages().len(),
                }),
            (state, input) => Err(NavigationError::UnexpectedInput {
                screen: state.screen().as_str(),
                input: format!("{input:?}"),
            }),
        }
    }

    /// Resolves the `index`-th choice of `scene` to its destination.
    fn destination(&self, scene: SceneId, index: usize) -> Result<SceneId, NavigationError> {
        let scene = &self.story[scene];
        let (to, _) = scene
            .choice_at(index)
            .ok_or_else(|| NavigationError::ChoiceOutOfRange {
                scene: scene.name().to_owned(),
                index,
                available: scene.choice_count(),
            })?;
        debug!(from = %scene.name(), %to, "choice taken");
        // Prepared stories have no dangling choices.
        Ok(self
            .story
            .id_of(to)
            .expect("choice destinations of a prepared story exist"))
    }

    /// Writes the history; returns the notice to show if that failed.
    fn persist(&self, history: &History) -> Option<&'static str> {
        match self.store.save(&history.indices()) {
            Ok(()) => {
                debug!(history = ?history.indices(), "history saved");
                None
            }
            Err(e) => {
                warn!(error = %e, "failed to save history");
                Some(SAVE_FAILED)
            }
        }
    }

    /// Loads the saved history; returns the notice to show if that failed.
    fn resume(&self) -> Result<History, &'static str> {
        let saved = self.store.load().map_err(|e| match e {
            StoreError::NotFound => {
                info!("continue requested without a saved game");
                NO_SAVED_GAME
            }
            other => {
                warn!(error = %other, "failed to load saved history");
                SAVE_UNREADABLE
            }
        })?;
        History::restore(&saved, &self.story).map_err(|e| {
            warn!(error = %e, ?saved, "saved history does not fit the story");
            SAVE_UNREADABLE
        })
    }

    fn scene_view(&self, id: SceneId) -> SceneView {
        let scene = &self.story[id];
        SceneView {
            title: scene.name().to_owned(),
            text: self.tr(scene.narrative_text()),
            background: scene.background().to_owned(),
            controls: SceneControls {
                menu: self.tr(MENU),
                back: self.tr(BACK),
            },
            notice: self.notice.map(|n| self.tr(n)),
        }
    }

    fn tr(&self, text: &str) -> String {
        self.translator.translate_or_keep(text, &self.language)
    }

    fn render(&mut self) {
        let view = self.view();
        self.presenter.render(&view);
    }
}
