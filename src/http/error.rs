//! HTTP error handling and response types.
//!
//! Every failure collapses to the same JSON body shape, an object with
//! a single `error` string, regardless of where the failure originated.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::services::pdf::RenderError;

/// Error response body: an object carrying only the error text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message
    pub error: String,
}

/// Application error type for HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Birth date string did not parse.
    #[error("invalid date `{0}`: expected YYYY-MM-DD")]
    InvalidDate(String),
    /// Birth time string did not parse.
    #[error("invalid time `{0}`: expected HH:MM")]
    InvalidTime(String),
    /// Latitude outside [-90, 90].
    #[error("latitude {0} out of range [-90, 90]")]
    InvalidLatitude(f64),
    /// Longitude outside [-180, 180].
    #[error("longitude {0} out of range [-180, 180]")]
    InvalidLongitude(f64),
    /// PDF rendering or spooling failed.
    #[error("report rendering failed: {0}")]
    Render(#[from] RenderError),
    /// Reading the spooled report back failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidDate(_)
            | AppError::InvalidTime(_)
            | AppError::InvalidLatitude(_)
            | AppError::InvalidLongitude(_) => StatusCode::BAD_REQUEST,
            AppError::Render(_) | AppError::Io(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
