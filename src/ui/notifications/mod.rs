// SPDX-License-Identifier: MPL-2.0
//! Notification subsystem.
//!
//! An ordered in-memory log of user-facing events that renders as toasts,
//! inline banners or modal dialogs.
//!
//! # Components
//!
//! - [`notification`] - Immutable `Notification` record, severity, kind and prompt
//! - [`store`] - Ordered log with reactive subscribers
//! - [`service`] - Builds notifications and owns the toast auto-dismiss policy
//! - [`caught`] - Turns failure values into notification text and code
//! - [`toast`], [`inline`], [`modal`] - Presentation surfaces
//! - [`focus`] - Keyboard focus tracking shared with the pages
//!
//! # Usage
//!
//! ```ignore
//! use bookshelf::ui::notifications::{Service, Severity, Store, ToastList};
//!
//! let store = Store::new();
//! let service = Service::new(store.clone());
//! let toasts = ToastList::new(&store);
//!
//! service.show_toast("Saved", Severity::Success, None);
//! assert_eq!(toasts.len(), 1);
//! ```

pub mod caught;
mod error;
pub mod focus;
pub mod inline;
pub mod modal;
mod notification;
mod service;
mod store;
pub mod toast;

pub use caught::Caught;
pub use error::NotificationError;
pub use focus::{FocusId, FocusTracker};
pub use inline::InlineSlot;
pub use modal::{ModalState, ModalSurface};
pub use notification::{Action, Kind, Notification, NotificationId, Prompt, Severity};
pub use service::{ModalOptions, Service, TOAST_DISMISS_DELAY};
pub use store::{Snapshot, Store, Subscription};
pub use toast::ToastList;
