use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{AppState, error::ApiError};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AlertRequest {
    /// Overrides the configured user name
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AlertResponse {
    pub sent: bool,
    pub location: String,
}

/// Sends an emergency alert for the session's current location.
///
/// The JSON body is optional; without one the configured user name is used.
/// Delivery failures come back as `sent: false`, never as an error status.
pub async fn send_alert(
    Path(id): Path<String>,
    State(state): State<AppState>,
    request: Option<Json<AlertRequest>>,
) -> Result<Json<AlertResponse>, ApiError> {
    let location = {
        let sessions = state.sessions.lock().await;
        let session = sessions
            .get(&id)
            .ok_or_else(|| ApiError::unknown_session(&id))?;
        session
            .current_location()
            .map(str::to_owned)
            .ok_or_else(|| ApiError::BadRequest("no location selected".into()))?
    };

    let name = request
        .and_then(|Json(request)| request.name)
        .unwrap_or_else(|| state.user_name.to_string());
    let dispatcher = state.dispatcher.clone();
    let target = location.clone();

    // Delivery blocks on the network
    let sent = tokio::task::spawn_blocking(move || dispatcher.send(&name, &target))
        .await
        .unwrap_or_else(|e| {
            warn!("Alert task failed: {e}");
            false
        });

    if sent {
        info!(session = %id, %location, "Alert sent");
    }
    Ok(Json(AlertResponse { sent, location }))
}
