//! HTTP service around the safe route navigator.
//!
//! Exposes the location list, route search, per-session walkthroughs and
//! emergency alerts as a small JSON API.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    BoxError, Json, Router,
    error_handling::HandleErrorLayer,
    http::StatusCode,
    routing::{get, post},
};
use saferoute_core::{LocationGraph, alert::AlertDispatcher};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use error::ErrorBody;
use session::SessionStore;

pub mod alert;
pub mod config;
pub mod error;
pub mod model;
pub mod routing;
pub mod session;
pub mod simulation;

const MAX_CONCURRENT_REQUESTS: usize = 64;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub graph: Arc<LocationGraph>,
    pub sessions: SessionStore,
    pub dispatcher: Arc<dyn AlertDispatcher + Send + Sync>,
    /// Name used in alerts when the request does not give one
    pub user_name: Arc<str>,
}

impl AppState {
    pub fn new(
        graph: LocationGraph,
        dispatcher: Arc<dyn AlertDispatcher + Send + Sync>,
        user_name: &str,
    ) -> Self {
        Self {
            graph: Arc::new(graph),
            sessions: SessionStore::default(),
            dispatcher,
            user_name: Arc::from(user_name),
        }
    }
}

pub fn router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/locations", get(model::list_locations))
        .route("/route", post(routing::find_route))
        .route(
            "/sessions/{id}",
            get(simulation::walk_view).delete(session::drop_session),
        )
        .route("/sessions/{id}/route", post(routing::find_session_route))
        .route("/sessions/{id}/start", post(simulation::start_walk))
        .route("/sessions/{id}/step", post(simulation::step_walk))
        .route("/sessions/{id}/alert", post(alert::send_alert))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(request_timeout)
                .concurrency_limit(MAX_CONCURRENT_REQUESTS),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn handle_middleware_error(err: BoxError) -> (StatusCode, Json<ErrorBody>) {
    if err.is::<tower::timeout::error::Elapsed>() {
        (
            StatusCode::REQUEST_TIMEOUT,
            Json(ErrorBody::new("request timed out")),
        )
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::new(format!("unhandled internal error: {err}"))),
        )
    }
}

/// Binds `bind` and serves until Ctrl-C
pub async fn serve(state: AppState, bind: &str, request_timeout: Duration) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state, request_timeout))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    info!("Shutting down");
}
