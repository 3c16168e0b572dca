//! VN Engine: HTTP play server.
//!
//! Serves a prepared story over a JSON API: clients open play sessions, send
//! player inputs and receive the screen to draw after each one.

pub mod config;
pub mod error;
pub mod routes;
pub mod session;
pub mod state;

use axum::Router;

use crate::state::AppState;

/// Builds the application router over `state`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/story", routes::story::router())
        .nest("/api/v1/sessions", routes::sessions::router())
        .with_state(state)
}
