// SPDX-License-Identifier: MPL-2.0
//! Library data port.
//!
//! The UI loads the catalogue and the current reader through
//! [`LibraryRepository`]. Failures are reported as [`FetchError`], whose
//! [`code`](FetchError::code) is what ends up on danger notifications.

use crate::domain::{Book, User};
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

// =============================================================================
// FetchError
// =============================================================================

/// Errors raised while talking to the library API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// The server could not be reached.
    #[error("Network Error: {0}")]
    Network(String),

    /// The request took longer than the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// The server answered with a non-success status.
    #[error("Request failed with status code {status}")]
    Status { status: u16, body: Option<Value> },

    /// The response body did not match the expected shape.
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Returns the machine-readable code attached to notifications.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "ERR_NETWORK",
            FetchError::Timeout => "ECONNABORTED",
            FetchError::Status { status, .. } if *status < 500 => "ERR_BAD_REQUEST",
            FetchError::Status { .. } | FetchError::Decode(_) => "ERR_BAD_RESPONSE",
        }
    }

    /// Returns the HTTP status, when the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the decoded error body the server sent, if any.
    #[must_use]
    pub fn body(&self) -> Option<&Value> {
        match self {
            FetchError::Status { body, .. } => body.as_ref(),
            _ => None,
        }
    }
}

// =============================================================================
// LibraryRepository
// =============================================================================

/// Boxed future returned by [`LibraryRepository`] methods.
pub type FetchFuture<T> = Pin<Box<dyn Future<Output = Result<T, FetchError>> + Send>>;

/// Source of library data.
///
/// Methods return owned futures so callers can hand them to
/// `iced::Task::perform` without borrowing the repository.
pub trait LibraryRepository: Send + Sync {
    /// Fetches the whole catalogue.
    fn books(&self) -> FetchFuture<Vec<Book>>;

    /// Fetches the signed-in reader.
    fn me(&self) -> FetchFuture<User>;
}
