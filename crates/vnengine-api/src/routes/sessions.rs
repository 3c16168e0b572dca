//! Routes for play sessions.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;
use vnengine_core::persistence::is_valid_slot_name;
use vnengine_core::presentation::ScreenView;
use vnengine_navigator::{Flow, Navigator, PlayerInput};

use crate::error::ApiError;
use crate::session::{LatestScreen, PlaySession, SharedSession, lock_session};
use crate::state::AppState;

const DEFAULT_SLOT: &str = "default";

/// Request body for POST /.
#[derive(Debug, Default, Deserialize)]
pub struct CreateSessionRequest {
    /// Save slot to play in; `default` when omitted.
    #[serde(default)]
    pub slot: Option<String>,
}

/// Response body for POST / and GET /{id}.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    /// Handle for subsequent requests.
    pub session_id: Uuid,
    /// Save slot the session writes to.
    pub slot: String,
    /// Active display language.
    pub language: String,
    /// When the session was opened.
    pub created_at: DateTime<Utc>,
    /// The screen to draw.
    pub screen: ScreenView,
}

/// Response body for POST /{id}/input.
#[derive(Debug, Serialize)]
pub struct InputResponse {
    /// The screen to draw; absent once the player quit.
    pub screen: Option<ScreenView>,
    /// `true` once the player quit. The session is gone afterwards.
    pub finished: bool,
}

fn session_response(session_id: Uuid, session: &PlaySession) -> SessionResponse {
    SessionResponse {
        session_id,
        slot: session.slot.clone(),
        language: session.navigator.language().to_owned(),
        created_at: session.created_at,
        screen: session.screen(),
    }
}

fn find_session(state: &AppState, session_id: Uuid) -> Result<SharedSession, ApiError> {
    state
        .sessions()?
        .get(session_id)
        .ok_or(ApiError::SessionNotFound(session_id))
}

/// POST /
#[instrument(skip(state, request), fields(slot))]
async fn create_session(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let slot = request.slot.unwrap_or_else(|| DEFAULT_SLOT.to_owned());
    if !is_valid_slot_name(&slot) {
        return Err(ApiError::InvalidSlot(slot));
    }
    tracing::Span::current().record("slot", slot.as_str());

    let now = state.clock.now();
    let navigator = Navigator::new(
        state.story.clone(),
        state.save_slots.open(&slot),
        state.translator.clone(),
        LatestScreen::default(),
    );
    let session = PlaySession {
        navigator,
        slot,
        created_at: now,
        last_active: now,
    };
    let session_id = Uuid::new_v4();
    let response = session_response(session_id, &session);

    {
        let mut sessions = state.sessions()?;
        sessions.evict_idle(now, state.idle_timeout);
        sessions.open(session_id, session)?;
    }
    info!(%session_id, "play session opened");

    Ok(Json(response))
}

/// GET /{id}
#[instrument(skip(state))]
async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionResponse>, ApiError> {
    let shared = find_session(&state, session_id)?;
    let mut session = lock_session(&shared)?;
    session.last_active = state.clock.now();

    Ok(Json(session_response(session_id, &session)))
}

/// POST /{id}/input
///
/// The transition saves the history, so it runs on the blocking pool and
/// holds only this session's lock.
#[instrument(skip(state))]
async fn submit_input(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(input): Json<PlayerInput>,
) -> Result<Json<InputResponse>, ApiError> {
    let shared = find_session(&state, session_id)?;
    let now = state.clock.now();

    let response = tokio::task::spawn_blocking(move || {
        let mut session = lock_session(&shared)?;
        session.last_active = now;
        let response = match session.navigator.handle(input)? {
            Flow::Continue => InputResponse {
                screen: Some(session.screen()),
                finished: false,
            },
            Flow::Quit => InputResponse {
                screen: None,
                finished: true,
            },
        };
        Ok::<_, ApiError>(response)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("input task failed: {e}")))??;

    if response.finished {
        state.sessions()?.close(session_id);
        info!(%session_id, "play session closed");
    }

    Ok(Json(response))
}

/// DELETE /{id}
#[instrument(skip(state))]
async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !state.sessions()?.close(session_id) {
        return Err(ApiError::SessionNotFound(session_id));
    }
    info!(%session_id, "play session closed");

    Ok(StatusCode::NO_CONTENT)
}

/// Returns the router for play sessions.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_session))
        .route("/{id}", get(get_session).delete(delete_session))
        .route("/{id}/input", post(submit_input))
}
