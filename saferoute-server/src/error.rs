use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Error returned by handlers, rendered as `{ "error": ... }`
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unprocessable(String),
    Internal(String),
}

impl ApiError {
    pub fn unknown_session(id: &str) -> Self {
        Self::NotFound(format!("unknown session: {id}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
            Self::NotFound(m) => (StatusCode::NOT_FOUND, m),
            Self::Conflict(m) => (StatusCode::CONFLICT, m),
            Self::Unprocessable(m) => (StatusCode::UNPROCESSABLE_ENTITY, m),
            Self::Internal(m) => {
                tracing::error!("{m}");
                (StatusCode::INTERNAL_SERVER_ERROR, m)
            }
        };
        (status, Json(ErrorBody::new(message))).into_response()
    }
}

impl From<saferoute_core::Error> for ApiError {
    fn from(err: saferoute_core::Error) -> Self {
        use saferoute_core::Error;
        match err {
            Error::InvalidPath => Self::BadRequest(err.to_string()),
            Error::NoPathInstalled => Self::Conflict("no route selected for this session".into()),
            Error::MalformedInput { .. } => Self::BadRequest(err.to_string()),
            Error::NetworkError(_) | Error::IoError(_) => Self::Internal(err.to_string()),
        }
    }
}
