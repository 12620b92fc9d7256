// SPDX-License-Identifier: MPL-2.0
//! Normalization of failure values into notification text.
//!
//! Data operations fail with all sorts of values: typed errors, bare strings,
//! decoded JSON error bodies. [`Caught`] is the borrowed view the notification
//! service accepts; it only assumes an optional message and an optional code.

use crate::application::port::FetchError;
use serde_json::Value;
use std::error::Error as StdError;

/// Message used when nothing readable can be extracted.
pub const FALLBACK_MESSAGE: &str = "An unexpected error occurred";

/// A failure value as seen by the notification layer.
#[derive(Debug, Clone, Copy)]
pub enum Caught<'a> {
    /// A typed error. Its `Display` output is the message.
    Error {
        source: &'a (dyn StdError + 'a),
        code: Option<&'a str>,
    },
    /// A bare string.
    Text(&'a str),
    /// A structured payload, typically a decoded JSON error body.
    Payload(&'a Value),
    /// Anything else.
    Unknown,
}

impl<'a> Caught<'a> {
    /// Wraps any typed error that carries no code.
    pub fn error(source: &'a (dyn StdError + 'a)) -> Self {
        Caught::Error { source, code: None }
    }

    /// Returns the text shown to the user.
    ///
    /// Typed errors first, then strings, then a payload object's string
    /// `message` field, then [`FALLBACK_MESSAGE`].
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Caught::Error { source, .. } => source.to_string(),
            Caught::Text(text) => (*text).to_string(),
            Caught::Payload(Value::String(text)) => text.clone(),
            Caught::Payload(Value::Object(fields)) => match fields.get("message") {
                Some(Value::String(message)) => message.clone(),
                _ => FALLBACK_MESSAGE.to_string(),
            },
            Caught::Payload(_) | Caught::Unknown => FALLBACK_MESSAGE.to_string(),
        }
    }

    /// Returns the machine code, when the value carries a string one.
    #[must_use]
    pub fn code(&self) -> Option<String> {
        match self {
            Caught::Error { code, .. } => code.map(str::to_string),
            Caught::Payload(Value::Object(fields)) => match fields.get("code") {
                Some(Value::String(code)) => Some(code.clone()),
                _ => None,
            },
            _ => None,
        }
    }
}

impl<'a> From<&'a str> for Caught<'a> {
    fn from(text: &'a str) -> Self {
        Caught::Text(text)
    }
}

impl<'a> From<&'a String> for Caught<'a> {
    fn from(text: &'a String) -> Self {
        Caught::Text(text)
    }
}

impl<'a> From<&'a Value> for Caught<'a> {
    fn from(payload: &'a Value) -> Self {
        Caught::Payload(payload)
    }
}

impl<'a> From<&'a FetchError> for Caught<'a> {
    fn from(error: &'a FetchError) -> Self {
        Caught::Error {
            source: error,
            code: Some(error.code()),
        }
    }
}

impl<'a> From<&'a std::io::Error> for Caught<'a> {
    fn from(error: &'a std::io::Error) -> Self {
        Caught::error(error)
    }
}

impl<'a> From<&'a crate::error::Error> for Caught<'a> {
    fn from(error: &'a crate::error::Error) -> Self {
        match error {
            crate::error::Error::Fetch(fetch) => fetch.into(),
            other => Caught::error(other),
        }
    }
}
