//! Story configuration summary.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use serde::Serialize;
use vnengine_core::presentation::LanguageOption;
use vnengine_core::translation::language_display_name;

use crate::state::AppState;

/// Target resolution with its pixel size.
#[derive(Debug, Serialize)]
pub struct ResolutionSummary {
    /// `hd`, `fullhd` or `4k`.
    pub name: &'static str,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Response body for GET /api/v1/story.
#[derive(Debug, Serialize)]
pub struct StorySummary {
    /// Languages offered in the picker.
    pub languages: Vec<LanguageOption>,
    /// Language new sessions start in.
    pub initial_language: String,
    /// Target resolution.
    pub resolution: ResolutionSummary,
    /// Starting menu background, if configured.
    pub starting_background: Option<String>,
    /// Scene names in creation order; the first is the entry scene.
    pub scenes: Vec<String>,
    /// Scenes that no path from the entry scene reaches.
    pub unreachable: Vec<String>,
}

/// GET /
async fn get_story(State(state): State<AppState>) -> Json<StorySummary> {
    let story = &state.story;
    let (width, height) = story.resolution().dimensions();

    Json(StorySummary {
        languages: story
            .languages()
            .iter()
            .map(|code| LanguageOption {
                code: code.clone(),
                name: language_display_name(code).to_owned(),
            })
            .collect(),
        initial_language: story.initial_language().to_owned(),
        resolution: ResolutionSummary {
            name: story.resolution().as_str(),
            width,
            height,
        },
        starting_background: story.starting_background().map(str::to_owned),
        scenes: story.scene_names().map(str::to_owned).collect(),
        unreachable: story
            .report()
            .unreachable
            .iter()
            .map(|s| s.name.clone())
            .collect(),
    })
}

/// Returns the router for the story summary.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_story))
}
