use axum::{
    Json,
    extract::{Path, State},
};
use saferoute_core::StepOutcome;
use serde::Serialize;

use crate::{AppState, error::ApiError, session::WalkView};

#[derive(Debug, Serialize)]
pub struct StepResponse {
    pub outcome: StepOutcome,
    #[serde(flatten)]
    pub view: WalkView,
}

pub async fn walk_view(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<WalkView>, ApiError> {
    let sessions = state.sessions.lock().await;
    let session = sessions
        .get(&id)
        .ok_or_else(|| ApiError::unknown_session(&id))?;
    Ok(Json(session.view()))
}

/// Starts the walk from the first location, or restarts it
pub async fn start_walk(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<WalkView>, ApiError> {
    let mut sessions = state.sessions.lock().await;
    let session = sessions
        .get_mut(&id)
        .ok_or_else(|| ApiError::unknown_session(&id))?;

    session.walk.start()?;
    Ok(Json(session.view()))
}

pub async fn step_walk(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StepResponse>, ApiError> {
    let mut sessions = state.sessions.lock().await;
    let session = sessions
        .get_mut(&id)
        .ok_or_else(|| ApiError::unknown_session(&id))?;

    let outcome = session.walk.step()?;
    if outcome == StepOutcome::Completed {
        tracing::debug!(session = %id, "Walk completed");
    }
    Ok(Json(StepResponse {
        outcome,
        view: session.view(),
    }))
}
