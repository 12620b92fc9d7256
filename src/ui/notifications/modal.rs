// SPDX-License-Identifier: MPL-2.0
//! Modal surface.
//!
//! The modal surface shows `Kind::Modal` notifications one at a time, always
//! the oldest remaining one in store order. It is a two-state machine:
//!
//! - `Idle`: no modal notification in the store.
//! - `Displaying(n)`: `n` is the first modal notification in the store.
//!
//! Entering `Displaying` captures the focused control and moves focus to the
//! dialog. Going back to `Idle` restores the captured control. While a dialog
//! is shown, Tab and Shift+Tab cycle through its controls only.

use super::focus::{FocusId, FocusTracker};
use super::notification::{Kind, Notification, Severity};
use super::store::{Store, Subscription};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, center, mouse_area, opaque, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// The dialog container itself.
pub const DIALOG: FocusId = FocusId::new("modal-dialog");
/// "×" button in the dialog header.
pub const CLOSE: FocusId = FocusId::new("modal-close");
/// Cancel button of ask modals.
pub const CANCEL: FocusId = FocusId::new("modal-cancel");
/// Action button of ask modals, OK button of info modals.
pub const PRIMARY: FocusId = FocusId::new("modal-primary");

const ASK_CONTROLS: [FocusId; 3] = [CLOSE, CANCEL, PRIMARY];
const INFO_CONTROLS: [FocusId; 2] = [CLOSE, PRIMARY];

/// Which modal, if any, is on screen.
#[derive(Debug, Clone, Default)]
pub enum ModalState {
    #[default]
    Idle,
    Displaying(Notification),
}

impl ModalState {
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        match self {
            ModalState::Idle => None,
            ModalState::Displaying(notification) => Some(notification),
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, ModalState::Idle)
    }
}

/// User intent raised while a dialog is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Action button of an ask modal.
    Confirm,
    /// Cancel button of an ask modal.
    Cancel,
    /// "×" button.
    Close,
    /// OK button of an info modal.
    Acknowledge,
    /// Escape key.
    Escape,
    /// Click outside the dialog.
    Backdrop,
    /// Enter key.
    Enter,
    /// Tab key, `backwards` when Shift is held.
    Tab { backwards: bool },
}

#[derive(Default)]
struct Shared {
    state: ModalState,
    /// Focus to restore once the last modal is gone.
    captured: Option<FocusId>,
}

/// Store-driven modal dialog.
pub struct ModalSurface {
    store: Store,
    focus: FocusTracker,
    shared: Rc<RefCell<Shared>>,
    _subscription: Subscription,
}

impl fmt::Debug for ModalSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shared = self.shared.borrow();
        f.debug_struct("ModalSurface")
            .field("state", &shared.state)
            .field("captured", &shared.captured)
            .finish_non_exhaustive()
    }
}

impl ModalSurface {
    /// Subscribes to `store`; focus changes go through `focus`.
    #[must_use]
    pub fn new(store: &Store, focus: &FocusTracker) -> Self {
        let shared = Rc::new(RefCell::new(Shared::default()));

        let sink = Rc::clone(&shared);
        let tracker = focus.clone();
        let subscription = store.subscribe(move |snapshot| {
            let first = snapshot.iter().find(|n| n.kind() == Kind::Modal);
            transition(&mut sink.borrow_mut(), first, &tracker);
        });

        Self {
            store: store.clone(),
            focus: focus.clone(),
            shared,
            _subscription: subscription,
        }
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn state(&self) -> ModalState {
        self.shared.borrow().state.clone()
    }

    /// Returns the displayed notification.
    #[must_use]
    pub fn current(&self) -> Option<Notification> {
        self.shared.borrow().state.current().cloned()
    }

    #[must_use]
    pub fn is_displaying(&self) -> bool {
        !self.shared.borrow().state.is_idle()
    }

    /// Controls reachable with Tab for the displayed dialog, in order.
    #[must_use]
    pub fn controls(&self) -> &'static [FocusId] {
        match self.current() {
            Some(notification) if notification.prompt().is_ask() => &ASK_CONTROLS,
            Some(_) => &INFO_CONTROLS,
            None => &[],
        }
    }

    pub fn update(&self, message: Message) {
        // No borrow of `shared` may be held past this point: actions and
        // removals re-enter the store subscription.
        let Some(current) = self.current() else {
            return;
        };
        let ask = current.prompt().is_ask();

        match message {
            Message::Confirm if ask => self.confirm(&current),
            Message::Confirm => log::debug!("confirm ignored on info modal {}", current.id()),
            Message::Cancel | Message::Close | Message::Acknowledge => self.dismiss(&current),
            Message::Escape | Message::Backdrop if !ask => self.dismiss(&current),
            Message::Escape | Message::Backdrop => {}
            Message::Enter => match self.focus.focused() {
                Some(id) if id == CLOSE || id == CANCEL => self.dismiss(&current),
                _ if ask => self.confirm(&current),
                _ => self.dismiss(&current),
            },
            Message::Tab { backwards } => {
                self.focus.cycle(self.controls(), backwards);
            }
        }
    }

    fn confirm(&self, notification: &Notification) {
        if let Some(action) = notification.prompt().on_action() {
            action();
        }
        self.store.remove(notification.id());
    }

    fn dismiss(&self, notification: &Notification) {
        self.store.remove(notification.id());
    }

    /// Renders the dialog over a dimmed backdrop, or nothing when idle.
    pub fn view<'a>(&self, i18n: &I18n) -> Option<Element<'a, Message>> {
        let notification = self.current()?;
        let severity = notification.severity();
        let accent = severity.color();
        let focused = |id: FocusId| self.focus.is_focused(id);

        let close = button(Text::new("×").size(typography::TITLE_SM))
            .on_press(Message::Close)
            .padding([0.0, spacing::XXS])
            .style(styles::button::focus_ring(styles::button::dismiss, focused(CLOSE)));

        let header = Row::new()
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(
                    Text::new(i18n.tr(severity.title_key()))
                        .size(typography::TITLE_MD)
                        .color(accent),
                )
                .width(Length::Fill),
            )
            .push(close);

        let mut body = Column::new().spacing(spacing::SM).push(header);
        if let Some(context) = notification.context() {
            body = body.push(
                Text::new(i18n.tr_with_args("modal-context", &[("context", context)]))
                    .size(typography::CAPTION),
            );
        }
        body = body.push(Text::new(notification.message().to_string()).size(typography::BODY_LG));
        if let Some(code) = notification.code() {
            body = body.push(
                Text::new(i18n.tr_with_args("modal-code", &[("code", code)]))
                    .size(typography::CAPTION),
            );
        }

        let mut footer = Row::new().spacing(spacing::XS);
        let primary = match notification.prompt().action_label() {
            Some(label) => {
                footer = footer.push(
                    button(Text::new(i18n.tr("modal-cancel")))
                        .on_press(Message::Cancel)
                        .padding([spacing::XS, spacing::MD])
                        .style(styles::button::focus_ring(
                            styles::button::unselected,
                            focused(CANCEL),
                        )),
                );
                let action_style: fn(&Theme, button::Status) -> button::Style =
                    if severity == Severity::Danger {
                        styles::button::danger
                    } else {
                        styles::button::primary
                    };
                button(Text::new(label.to_string()))
                    .on_press(Message::Confirm)
                    .style(styles::button::focus_ring(action_style, focused(PRIMARY)))
            }
            None => button(Text::new(i18n.tr("modal-ok")))
                .on_press(Message::Acknowledge)
                .style(styles::button::focus_ring(styles::button::primary, focused(PRIMARY))),
        };
        footer = footer.push(primary.padding([spacing::XS, spacing::MD]));

        body = body.push(
            Container::new(footer)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right),
        );

        let dialog = Container::new(body)
            .width(Length::Fixed(sizing::MODAL_WIDTH))
            .padding(spacing::LG)
            .style(styles::container::card(if focused(DIALOG) {
                palette::FOCUS_RING
            } else {
                accent
            }));

        Some(
            opaque(
                mouse_area(center(opaque(dialog)).style(styles::container::backdrop))
                    .on_press(Message::Backdrop),
            ),
        )
    }
}

/// Applies a store change to the state machine.
fn transition(shared: &mut Shared, first: Option<&Notification>, focus: &FocusTracker) {
    let shown = shared.state.current().map(Notification::id);

    match (shown, first) {
        (None, None) => {}
        (Some(shown), Some(next)) if shown == next.id() => {}
        (shown, Some(next)) => {
            if shown.is_none() {
                shared.captured = focus.focused();
            }
            focus.focus(DIALOG);
            log::debug!("modal {} displayed", next.id());
            shared.state = ModalState::Displaying(next.clone());
        }
        (Some(_), None) => {
            focus.set(shared.captured.take());
            shared.state = ModalState::Idle;
        }
    }
}
