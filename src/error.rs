//! Error handling and custom error types
//!
//! Every failure of the relay is one of four categories (validation,
//! configuration, provider, internal). The HTTP boundary turns each into a
//! JSON `{ error, detail? }` payload with a matching status code.

use crate::models::ErrorBody;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Please provide 'faith' and 'sdg' fields.")]
    Validation,

    #[error("Invalid request body: {0}")]
    MalformedRequest(String),

    #[error("{0} is not set")]
    Configuration(&'static str),

    #[error("Invalid value for {name}: {value}")]
    InvalidConfig { name: &'static str, value: String },

    #[error("Image API error: {status}")]
    ProviderStatus { status: u16, body: String },

    #[error("No image data returned from API")]
    MissingImageData { response: serde_json::Value },

    #[error("Image API timeout after {0:?}")]
    Timeout(Duration),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Broad failure category, used to pick the HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Configuration,
    Provider,
    Internal,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation | Error::MalformedRequest(_) => ErrorKind::Validation,
            Error::Configuration(_) | Error::InvalidConfig { .. } => ErrorKind::Configuration,
            Error::ProviderStatus { .. } | Error::MissingImageData { .. } | Error::Timeout(_) => {
                ErrorKind::Provider
            }
            Error::Http(_) | Error::Serialization(_) => ErrorKind::Internal,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Configuration | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorKind::Provider => StatusCode::BAD_GATEWAY,
        }
    }

    /// Client-facing payload. Provider diagnostics travel in `detail`.
    pub fn to_body(&self) -> ErrorBody {
        let detail = match self {
            Error::ProviderStatus { body, .. } => Some(serde_json::Value::String(body.clone())),
            Error::MissingImageData { response } => Some(response.clone()),
            _ => None,
        };

        ErrorBody {
            error: self.to_string(),
            detail,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_body())).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
