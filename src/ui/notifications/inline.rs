// SPDX-License-Identifier: MPL-2.0
//! Inline surface.
//!
//! An [`InlineSlot`] is placed next to the control it reports on. It shows at
//! most one notification: the first one in store order whose context and kind
//! match the slot.

use super::notification::{Kind, Notification, NotificationId};
use super::store::{Store, Subscription};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Container, Row, Text};
use iced::{alignment, Element, Length};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Dismiss(NotificationId),
}

/// A context-bound slot for a single notification.
pub struct InlineSlot {
    context: String,
    kind: Kind,
    store: Store,
    current: Rc<RefCell<Option<Notification>>>,
    _subscription: Subscription,
}

impl fmt::Debug for InlineSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InlineSlot")
            .field("context", &self.context)
            .field("kind", &self.kind)
            .field("current", &self.current.borrow().as_ref().map(Notification::id))
            .finish_non_exhaustive()
    }
}

impl InlineSlot {
    /// Creates a slot showing `Kind::Inline` notifications tagged `context`.
    #[must_use]
    pub fn new(store: &Store, context: impl Into<String>) -> Self {
        Self::with_kind(store, context, Kind::Inline)
    }

    /// Creates a slot for another presentation kind.
    #[must_use]
    pub fn with_kind(store: &Store, context: impl Into<String>, kind: Kind) -> Self {
        let context = context.into();
        let current = Rc::new(RefCell::new(None));

        let sink = Rc::clone(&current);
        let wanted = context.clone();
        let subscription = store.subscribe(move |snapshot| {
            *sink.borrow_mut() = snapshot
                .iter()
                .find(|n| n.kind() == kind && n.context() == Some(wanted.as_str()))
                .cloned();
        });

        Self {
            context,
            kind,
            store: store.clone(),
            current,
            _subscription: subscription,
        }
    }

    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the notification occupying the slot.
    #[must_use]
    pub fn current(&self) -> Option<Notification> {
        self.current.borrow().clone()
    }

    pub fn update(&self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.store.remove(id);
            }
        }
    }

    /// Renders the banner, or an empty placeholder when the slot is free.
    pub fn view<'a>(&self) -> Element<'a, Message> {
        let current = self.current.borrow();
        let Some(notification) = current.as_ref() else {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        };

        let close = button(Text::new("×").size(typography::BODY_LG))
            .on_press(Message::Dismiss(notification.id()))
            .padding([0.0, spacing::XXS])
            .style(styles::button::dismiss);

        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(Text::new(notification.message().to_string()).size(typography::BODY))
                    .width(Length::Fill),
            )
            .push(close);

        Container::new(row)
            .width(Length::Fill)
            .padding([spacing::XS, spacing::SM])
            .style(styles::container::banner(notification.severity().color()))
            .into()
    }
}
