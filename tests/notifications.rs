// SPDX-License-Identifier: MPL-2.0
//! End-to-end behavior of the notification subsystem through its public API.

use bookshelf::application::port::FetchError;
use bookshelf::ui::notifications::{
    modal, FocusId, FocusTracker, InlineSlot, Kind, ModalOptions, ModalSurface,
    NotificationError, Service, Severity, Store, ToastList, TOAST_DISMISS_DELAY,
};
use serde_json::json;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

struct Surfaces {
    service: Service,
    focus: FocusTracker,
    toasts: ToastList,
    inline: InlineSlot,
    modal: ModalSurface,
}

fn surfaces() -> Surfaces {
    let store = Store::new();
    let focus = FocusTracker::new();
    Surfaces {
        toasts: ToastList::new(&store),
        inline: InlineSlot::new(&store, "profile-form"),
        modal: ModalSurface::new(&store, &focus),
        service: Service::new(store),
        focus,
    }
}

fn past_dismiss_delay() -> Instant {
    Instant::now() + TOAST_DISMISS_DELAY + Duration::from_millis(50)
}

#[test]
fn each_kind_reaches_only_its_surface() {
    let s = surfaces();
    s.service.show_toast("saved", Severity::Success, None);
    s.service
        .show_inline("email is taken", Severity::Warning, "profile-form");
    s.service
        .show_modal("session expired", Severity::Danger, ModalOptions::new())
        .expect("info modal");

    assert_eq!(s.toasts.len(), 1);
    assert_eq!(s.toasts.visible()[0].message(), "saved");
    assert_eq!(
        s.inline.current().map(|n| n.message().to_string()).as_deref(),
        Some("email is taken")
    );
    assert_eq!(
        s.modal.current().map(|n| n.message().to_string()).as_deref(),
        Some("session expired")
    );
}

#[test]
fn subscribers_see_every_change_in_order() {
    let store = Store::new();
    let service = Service::new(store.clone());
    let lengths = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&lengths);
    let _subscription = store.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.len()));

    let first = service.show_toast("one", Severity::Success, None);
    service.show_toast("two", Severity::Success, None);
    service.clear_notification(first);
    service.clear_all_notifications();

    // Initial delivery, two adds, one removal, one clear.
    assert_eq!(*lengths.borrow(), vec![0, 1, 2, 1, 0]);
}

#[test]
fn toasts_expire_but_inline_and_modal_stay() {
    let s = surfaces();
    s.service.show_toast("short lived", Severity::Success, None);
    s.service.show_inline("sticky", Severity::Warning, "profile-form");
    s.service
        .show_modal("blocking", Severity::Warning, ModalOptions::new())
        .expect("info modal");

    assert_eq!(s.service.tick(Instant::now()), 0);
    assert_eq!(s.service.tick(past_dismiss_delay()), 1);

    assert!(s.toasts.is_empty());
    assert!(s.inline.current().is_some());
    assert!(s.modal.is_displaying());
}

#[test]
fn handle_error_records_and_returns_the_failure() {
    let s = surfaces();
    let failure = FetchError::Status {
        status: 404,
        body: Some(json!({ "error": "not found" })),
    };

    let err = s.service.handle_error(&failure, Kind::Modal, Some("loadMe"));

    assert_eq!(
        err,
        NotificationError::UpstreamOperationFailed {
            message: "Request failed with status code 404".into(),
            code: Some("ERR_BAD_REQUEST".into()),
            context: Some("loadMe".into()),
        }
    );
    let shown = s.modal.current().expect("modal shown");
    assert_eq!(shown.severity(), Severity::Danger);
    assert_eq!(shown.code(), Some("ERR_BAD_REQUEST"));

    // Modal failures are not auto-dismissed.
    s.service.tick(past_dismiss_delay());
    assert!(s.modal.is_displaying());
}

#[test]
fn handle_error_accepts_plain_values() {
    let s = surfaces();

    let _ = s.service.handle_error("quota exceeded", Kind::Toast, None);
    let payload = json!({ "message": "invalid token" });
    let _ = s.service.handle_error(&payload, Kind::Toast, None);

    let messages: Vec<String> = s
        .toasts
        .visible()
        .iter()
        .map(|n| n.message().to_string())
        .collect();
    assert_eq!(messages, vec!["quota exceeded", "invalid token"]);
}

#[test]
fn half_configured_ask_modal_is_rejected() {
    let s = surfaces();
    let result = s.service.show_modal(
        "delete?",
        Severity::Danger,
        ModalOptions::new().action_label("Delete"),
    );

    assert_eq!(result, Err(NotificationError::InvalidConfirmationPair));
    assert!(s.service.store().is_empty());
    assert!(s.modal.state().is_idle());
}

#[test]
fn ask_modal_runs_its_action_once_and_closes() {
    let s = surfaces();
    let runs = Rc::new(Cell::new(0));
    let counter = Rc::clone(&runs);

    s.service
        .show_modal(
            "delete this item?",
            Severity::Danger,
            ModalOptions::new()
                .context("test")
                .action_label("Delete")
                .on_action(move || counter.set(counter.get() + 1)),
        )
        .expect("ask modal");

    s.modal.update(modal::Message::Escape);
    s.modal.update(modal::Message::Backdrop);
    assert!(s.modal.is_displaying());

    s.modal.update(modal::Message::Confirm);
    s.modal.update(modal::Message::Confirm);

    assert_eq!(runs.get(), 1);
    assert!(!s.modal.is_displaying());
}

#[test]
fn modals_queue_and_focus_returns_to_the_page() {
    let s = surfaces();
    let page_button = FocusId::new("page-button");
    s.focus.focus(page_button);

    s.service
        .show_modal("first", Severity::Success, ModalOptions::new())
        .expect("first");
    s.service
        .show_modal("second", Severity::Warning, ModalOptions::new())
        .expect("second");

    assert_eq!(s.focus.focused(), Some(modal::DIALOG));
    s.modal.update(modal::Message::Acknowledge);
    assert_eq!(
        s.modal.current().map(|n| n.message().to_string()).as_deref(),
        Some("second")
    );
    assert_eq!(s.focus.focused(), Some(modal::DIALOG));

    s.modal.update(modal::Message::Escape);
    assert!(!s.modal.is_displaying());
    assert_eq!(s.focus.focused(), Some(page_button));
}

#[test]
fn tab_wraps_inside_the_dialog() {
    let s = surfaces();
    s.service
        .show_modal(
            "save changes?",
            Severity::Warning,
            ModalOptions::new()
                .action_label("Save")
                .on_action(|| {}),
        )
        .expect("ask modal");

    let mut visited = Vec::new();
    for _ in 0..4 {
        s.modal.update(modal::Message::Tab { backwards: false });
        visited.push(s.focus.focused());
    }

    assert_eq!(
        visited,
        vec![
            Some(modal::CLOSE),
            Some(modal::CANCEL),
            Some(modal::PRIMARY),
            Some(modal::CLOSE)
        ]
    );
}
