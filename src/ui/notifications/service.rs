// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Service` turns caller intent (message, severity, presentation kind,
//! optional confirmation) into well-formed notifications, appends them to the
//! [`Store`] and owns the auto-dismiss policy: every toast gets a deferred
//! removal keyed by its id, fired by [`Service::tick`].

use super::caught::Caught;
use super::error::NotificationError;
use super::notification::{Action, Kind, Notification, NotificationId, Prompt, Severity};
use super::store::Store;
use crate::app::config::DEFAULT_TOAST_DISMISS_MS;
use std::cell::RefCell;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Delay after which toasts are removed.
pub const TOAST_DISMISS_DELAY: Duration = Duration::from_millis(DEFAULT_TOAST_DISMISS_MS);

/// Options accepted by [`Service::show_modal`].
///
/// `action_label` and `on_action` must be given together (ask modal) or not
/// at all (info modal).
#[derive(Default, Clone)]
pub struct ModalOptions {
    pub context: Option<String>,
    pub action_label: Option<String>,
    pub on_action: Option<Action>,
}

impl ModalOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    #[must_use]
    pub fn action_label(mut self, label: impl Into<String>) -> Self {
        self.action_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn on_action(mut self, action: impl Fn() + 'static) -> Self {
        self.on_action = Some(Rc::new(action));
        self
    }

    fn into_parts(self) -> Result<(Option<String>, Prompt), NotificationError> {
        let prompt = match (self.action_label, self.on_action) {
            (Some(action_label), Some(on_action)) => Prompt::Ask {
                action_label,
                on_action,
            },
            (None, None) => Prompt::Info,
            _ => return Err(NotificationError::InvalidConfirmationPair),
        };
        Ok((self.context, prompt))
    }
}

impl fmt::Debug for ModalOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalOptions")
            .field("context", &self.context)
            .field("action_label", &self.action_label)
            .field("on_action", &self.on_action.is_some())
            .finish()
    }
}

/// Pending deferred removals, earliest deadline first.
type Timers = BinaryHeap<Reverse<(Instant, NotificationId)>>;

/// Builds notifications and applies the lifecycle policy.
///
/// Cloning is cheap: clones share the store and the timer queue, so a clone
/// can be captured by a modal's action handler.
#[derive(Clone, Default)]
pub struct Service {
    store: Store,
    timers: Rc<RefCell<Timers>>,
}

impl fmt::Debug for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Service")
            .field("store", &self.store)
            .field("pending_timers", &self.timers.borrow().len())
            .finish()
    }
}

impl Service {
    /// Creates a service writing to the given store.
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self {
            store,
            timers: Rc::default(),
        }
    }

    /// Returns the store this service writes to.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Shows a notification of any kind. Toasts are removed after
    /// [`TOAST_DISMISS_DELAY`].
    pub fn show_notification(
        &self,
        message: impl Into<String>,
        severity: Severity,
        kind: Kind,
        context: Option<&str>,
    ) -> NotificationId {
        self.publish(Notification::new(severity, kind, message).with_context(context))
    }

    /// Shows a toast, removed after [`TOAST_DISMISS_DELAY`].
    pub fn show_toast(
        &self,
        message: impl Into<String>,
        severity: Severity,
        context: Option<&str>,
    ) -> NotificationId {
        self.show_notification(message, severity, Kind::Toast, context)
    }

    /// Shows an inline notification in the slot bound to `context`. It stays
    /// until cleared explicitly.
    pub fn show_inline(
        &self,
        message: impl Into<String>,
        severity: Severity,
        context: &str,
    ) -> NotificationId {
        self.show_notification(message, severity, Kind::Inline, Some(context))
    }

    /// Shows a modal dialog. It stays until the user closes or confirms it.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::InvalidConfirmationPair`] when only one of
    /// `action_label` / `on_action` is set. The store is left untouched.
    pub fn show_modal(
        &self,
        message: impl Into<String>,
        severity: Severity,
        options: ModalOptions,
    ) -> Result<NotificationId, NotificationError> {
        let (context, prompt) = options.into_parts()?;
        let notification = Notification::new(severity, Kind::Modal, message)
            .with_context(context)
            .with_prompt(prompt);
        Ok(self.publish(notification))
    }

    /// Records a failure as a danger notification and hands the failure back.
    ///
    /// The returned error is meant to be propagated by the caller so that its
    /// own control flow (stopping a spinner, aborting a chain) still runs.
    /// Toast-kind failures are removed after [`TOAST_DISMISS_DELAY`]; inline
    /// and modal ones stay until dismissed.
    #[must_use = "the failure should still be handled by the caller"]
    pub fn handle_error<'a>(
        &self,
        error: impl Into<Caught<'a>>,
        kind: Kind,
        context: Option<&str>,
    ) -> NotificationError {
        let caught = error.into();
        let message = caught.message();
        let code = caught.code();

        log::warn!(
            "{} failed: {message}{}",
            context.unwrap_or("operation"),
            code.as_deref()
                .map(|code| format!(" ({code})"))
                .unwrap_or_default()
        );

        let notification = Notification::new(Severity::Danger, kind, message.clone())
            .with_code(code.clone())
            .with_context(context);
        self.publish(notification);

        NotificationError::UpstreamOperationFailed {
            message,
            code,
            context: context.map(str::to_string),
        }
    }

    /// Passes `Ok` values through; records `Err` values with
    /// [`Service::handle_error`] and returns the resulting error.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::UpstreamOperationFailed`] when `result` is
    /// an error.
    pub fn report<T, E>(
        &self,
        result: Result<T, E>,
        kind: Kind,
        context: Option<&str>,
    ) -> Result<T, NotificationError>
    where
        for<'a> &'a E: Into<Caught<'a>>,
    {
        result.map_err(|error| self.handle_error(&error, kind, context))
    }

    /// Removes one notification. Unknown ids are ignored.
    pub fn clear_notification(&self, id: NotificationId) {
        self.store.remove(id);
    }

    /// Removes every notification.
    pub fn clear_all_notifications(&self) {
        self.store.clear();
    }

    /// Fires every deferred removal due at `now`. Returns how many timers fired.
    ///
    /// A timer whose notification was already removed is a no-op.
    pub fn tick(&self, now: Instant) -> usize {
        let mut due = Vec::new();
        {
            let mut timers = self.timers.borrow_mut();
            while let Some(Reverse((deadline, id))) = timers.peek().copied() {
                if deadline > now {
                    break;
                }
                timers.pop();
                due.push(id);
            }
        }

        for id in &due {
            log::trace!("auto-dismiss timer fired for {id}");
            self.store.remove(*id);
        }
        due.len()
    }

    /// Returns whether deferred removals are still waiting to fire.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        !self.timers.borrow().is_empty()
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers
            .borrow()
            .peek()
            .map(|Reverse((deadline, _))| *deadline)
    }

    fn publish(&self, notification: Notification) -> NotificationId {
        let id = notification.id();
        if notification.kind().auto_dismisses() {
            let deadline = notification.created_at() + TOAST_DISMISS_DELAY;
            self.timers.borrow_mut().push(Reverse((deadline, id)));
        }
        self.store.add(notification);
        id
    }
}
