//! Error Taxonomy
//!
//! Network/server failures (`RequestError`) and client-side validation
//! rejections (`ValidationError`). The two never share a display channel:
//! request errors end up in banners or errored views, validation errors are
//! shown inline next to the form that produced them.

use serde::Deserialize;
use thiserror::Error;

/// Failure of a single round trip through the HTTP adapter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The request never produced a response (offline, CORS, DNS, ...)
    #[error("transport failure: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status
    #[error("server responded with status {status}")]
    Status {
        status: u16,
        /// Human-readable `message` field from the error body, if any
        message: Option<String>,
    },
    /// A 2xx response whose body did not match the expected shape
    #[error("malformed response body: {0}")]
    Decode(String),
}

impl RequestError {
    /// Build a status error from a raw response body.
    ///
    /// The body is parsed leniently: anything that is not a JSON object with
    /// a non-blank string `message` yields no server message.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());
        RequestError::Status { status, message }
    }

    /// Message supplied by the server, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            RequestError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// HTTP status, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Exactly one of: the server message, or the call-site fallback
    pub fn display_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

/// Error body shape returned by the API
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Client-side rejection, raised before any request is issued
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required.")]
    Required(&'static str),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Password must be at least {0} characters.")]
    PasswordTooShort(usize),
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

/// Reject a blank (empty or whitespace-only) required field
pub fn require(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(())
    }
}

/// Minimal email shape check: something on both sides of a single `@`
pub fn require_email(value: &str) -> Result<(), ValidationError> {
    require(value, "Email")?;
    match value.trim().split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => Ok(()),
        _ => Err(ValidationError::InvalidEmail),
    }
}
