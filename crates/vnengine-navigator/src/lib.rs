//! VN Engine: Navigation.
//!
//! Responsible for the play session: the main menu, scene and choice
//! screens, the language picker, the back-navigation history and saving and
//! resuming progress.

pub mod application;
pub mod domain;

pub use application::navigator::Navigator;
pub use domain::history::{History, HistoryError};
pub use domain::input::{Flow, PlayerInput, Screen};
