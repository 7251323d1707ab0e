//! Typed errors and HTTP mapping.

use crate::response::Envelope;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unauthorized")]
    Unauthorized,
    /// Store failure with the message shown to the client. The source is logged, never returned.
    #[error("{message}")]
    Internal {
        message: &'static str,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    /// Wrap any error with a generic client-facing message. Client errors pass through unchanged.
    pub fn internal(self, message: &'static str) -> AppError {
        if matches!(self, AppError::BadRequest(_) | AppError::Unauthorized | AppError::Internal { .. }) {
            return self;
        }
        AppError::Internal {
            message,
            source: Box::new(self),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            AppError::Internal { message, source } => {
                tracing::error!(error = %source, "{}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
            AppError::Db(e) => {
                tracing::error!(error = %e, "unhandled database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "An error has occurred".to_string())
            }
        };
        (status, Json(Envelope::error(message))).into_response()
    }
}
