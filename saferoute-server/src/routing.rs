use axum::{
    Json,
    extract::{Path, State},
};
use saferoute_core::prelude::*;
use serde::Deserialize;
use tracing::info;

use crate::{AppState, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    pub source: String,
    pub destination: String,
}

fn no_path() -> ApiError {
    ApiError::NotFound("no valid path found".into())
}

/// One-off route search that touches no session
pub async fn find_route(
    State(state): State<AppState>,
    Json(request): Json<RouteRequest>,
) -> Result<Json<SafestPath>, ApiError> {
    find_safest_path(&state.graph, &request.source, &request.destination)
        .map(Json)
        .ok_or_else(no_path)
}

/// Searches a route and installs it as the session's walk.
///
/// A known source is remembered even when no route is found, so alerts can
/// still name it. Unknown sources never create or touch a session. A failed
/// search leaves the previous walk untouched.
pub async fn find_session_route(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(request): Json<RouteRequest>,
) -> Result<Json<SafestPath>, ApiError> {
    if request.source == request.destination {
        return Err(ApiError::Unprocessable(
            "source and destination must be different".into(),
        ));
    }

    if !state.graph.contains(&request.source) {
        return Err(no_path());
    }
    let found = find_safest_path(&state.graph, &request.source, &request.destination);

    let mut sessions = state.sessions.lock().await;
    let session = sessions.entry(id.clone()).or_default();
    session.source = Some(request.source.clone());

    let route = found.ok_or_else(no_path)?;
    session.walk.set_path(route.path.clone())?;
    session.route = Some(route.clone());

    info!(
        session = %id,
        hops = route.path.len().saturating_sub(1),
        danger = route.total_danger,
        "Route installed"
    );
    Ok(Json(route))
}
