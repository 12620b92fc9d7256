// SPDX-License-Identifier: MPL-2.0
//! Errors raised by the notification service.

use thiserror::Error;

/// Failures reported by [`super::Service`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    /// `show_modal` got an action label without a handler, or the reverse.
    #[error(
        "an ask modal needs both an action label and an action handler, an info modal needs neither"
    )]
    InvalidConfirmationPair,

    /// A data operation failed; the failure was also recorded as a notification.
    #[error("{}", describe_upstream(message, code.as_deref(), context.as_deref()))]
    UpstreamOperationFailed {
        message: String,
        code: Option<String>,
        context: Option<String>,
    },
}

fn describe_upstream(message: &str, code: Option<&str>, context: Option<&str>) -> String {
    let mut text = match context {
        Some(context) => format!("{context} failed: {message}"),
        None => format!("operation failed: {message}"),
    };
    if let Some(code) = code {
        text.push_str(&format!(" ({code})"));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_display_includes_context_and_code() {
        let err = NotificationError::UpstreamOperationFailed {
            message: "bad".into(),
            code: Some("E1".into()),
            context: Some("loadMe".into()),
        };
        assert_eq!(err.to_string(), "loadMe failed: bad (E1)");
    }

    #[test]
    fn upstream_display_without_context() {
        let err = NotificationError::UpstreamOperationFailed {
            message: "boom".into(),
            code: None,
            context: None,
        };
        assert_eq!(err.to_string(), "operation failed: boom");
    }
}
