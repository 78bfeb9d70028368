//! Application error type and its HTTP mapping.
//!
//! Responses carry only a status code: callers are the chat web client, which
//! reacts to the status alone. Internal errors are logged with their cause
//! when they are turned into a response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::entities::RouteError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The caller identity header is missing.
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// The request names a category that cannot be routed.
    #[error("bad request: {message}")]
    BadRequest { message: String },

    /// Malformed payload, operator misconfiguration or upstream failure.
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        match e {
            RouteError::Unrouted(_) => AppError::bad_request(e.to_string()),
            RouteError::Misconfigured { .. } => AppError::internal(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            AppError::Unauthorized { .. } => (status, "Not authorized").into_response(),
            AppError::BadRequest { message } => {
                tracing::debug!("Rejected request: {}", message);
                status.into_response()
            }
            AppError::Internal { message } => {
                tracing::error!("{}", message);
                status.into_response()
            }
        }
    }
}
