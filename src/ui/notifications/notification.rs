// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the immutable `Notification` record together with its
//! `Severity`, presentation `Kind` and confirmation `Prompt`.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Severity level drives the title and the accent color. It has no effect on
/// the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Warning,
    Danger,
}

impl Severity {
    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Danger => palette::ERROR_500,
        }
    }

    /// Returns the i18n key of the title shown above the message.
    #[must_use]
    pub fn title_key(&self) -> &'static str {
        match self {
            Severity::Success => "notification-title-success",
            Severity::Warning => "notification-title-warning",
            Severity::Danger => "notification-title-danger",
        }
    }
}

/// Which surface renders a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Rendered in a caller-chosen slot, keyed by context.
    Inline,
    /// Floating toast, self-dismissing.
    Toast,
    /// Blocking dialog.
    Modal,
}

impl Kind {
    /// Returns whether notifications of this kind are removed automatically.
    #[must_use]
    pub fn auto_dismisses(&self) -> bool {
        matches!(self, Kind::Toast)
    }
}

/// Callback run when the user confirms an ask modal.
pub type Action = Rc<dyn Fn()>;

/// Confirmation shape of a notification.
///
/// The action label and its handler only exist together: an ask prompt carries
/// both, an info prompt carries neither.
#[derive(Clone, Default)]
pub enum Prompt {
    #[default]
    Info,
    Ask { action_label: String, on_action: Action },
}

impl Prompt {
    /// Creates an ask prompt from a label and a handler.
    pub fn ask(action_label: impl Into<String>, on_action: impl Fn() + 'static) -> Self {
        Prompt::Ask {
            action_label: action_label.into(),
            on_action: Rc::new(on_action),
        }
    }

    #[must_use]
    pub fn is_ask(&self) -> bool {
        matches!(self, Prompt::Ask { .. })
    }

    /// Returns the action label of an ask prompt.
    #[must_use]
    pub fn action_label(&self) -> Option<&str> {
        match self {
            Prompt::Ask { action_label, .. } => Some(action_label),
            Prompt::Info => None,
        }
    }

    /// Returns the action handler of an ask prompt.
    #[must_use]
    pub fn on_action(&self) -> Option<&Action> {
        match self {
            Prompt::Ask { on_action, .. } => Some(on_action),
            Prompt::Info => None,
        }
    }
}

impl fmt::Debug for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prompt::Info => f.write_str("Info"),
            Prompt::Ask { action_label, .. } => f
                .debug_struct("Ask")
                .field("action_label", action_label)
                .finish_non_exhaustive(),
        }
    }
}

/// A notification to be displayed to the user. Immutable once built.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    message: String,
    severity: Severity,
    kind: Kind,
    code: Option<String>,
    created_at: Instant,
    context: Option<String>,
    prompt: Prompt,
}

impl Notification {
    /// Creates a notification with a fresh id, stamped now.
    pub fn new(severity: Severity, kind: Kind, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            message: message.into(),
            severity,
            kind,
            code: None,
            created_at: Instant::now(),
            context: None,
            prompt: Prompt::Info,
        }
    }

    /// Sets the originating operation tag.
    #[must_use]
    pub fn with_context(mut self, context: Option<impl Into<String>>) -> Self {
        self.context = context.map(Into::into);
        self
    }

    /// Sets the machine-readable code.
    #[must_use]
    pub fn with_code(mut self, code: Option<impl Into<String>>) -> Self {
        self.code = code.map(Into::into);
        self
    }

    /// Sets the confirmation prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: Prompt) -> Self {
        self.prompt = prompt;
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    #[must_use]
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    #[must_use]
    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    /// Returns when this notification was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the age of this notification.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }
}
