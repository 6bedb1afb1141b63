//! Per-session walkthrough state

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use saferoute_core::{SafestPath, WalkSimulator, WalkState};
use serde::Serialize;
use tokio::sync::Mutex;

use crate::{AppState, error::ApiError};

/// Sessions keyed by the id in the request path
pub type SessionStore = Arc<Mutex<HashMap<String, Session>>>;

/// Everything one user has selected and walked so far
#[derive(Debug, Default)]
pub struct Session {
    /// Last source the user searched from, the alert fallback
    pub source: Option<String>,
    /// Last route that was found for this session
    pub route: Option<SafestPath>,
    pub walk: WalkSimulator,
}

impl Session {
    /// Walker's location, or the selected source before the walk starts
    pub fn current_location(&self) -> Option<&str> {
        let source = self.source.as_deref()?;
        Some(self.walk.current_location(source))
    }

    pub fn view(&self) -> WalkView {
        WalkView {
            source: self.source.clone(),
            route: self.route.clone(),
            pointer: self.walk.pointer(),
            walk: self.walk.state(),
            current_location: self.current_location().map(str::to_owned),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WalkView {
    pub source: Option<String>,
    pub route: Option<SafestPath>,
    /// `-1` until the walk starts
    pub pointer: isize,
    pub walk: WalkState,
    pub current_location: Option<String>,
}

pub async fn drop_session(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    match state.sessions.lock().await.remove(&id) {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(ApiError::unknown_session(&id)),
    }
}
