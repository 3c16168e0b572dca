//! VN Engine: Story authoring.
//!
//! Responsible for the narrative graph (scenes joined by labeled choices),
//! its one-time pathing validation, the play-start setup check and loading
//! stories from YAML manifests.

pub mod application;
pub mod domain;

pub use application::setup::PlayableStory;
pub use application::validation::{UnreachableScene, ValidationReport};
pub use domain::scene::{Choice, Scene, SceneId};
pub use domain::story::{Resolution, Story};
