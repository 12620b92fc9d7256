// SPDX-License-Identifier: MPL-2.0
//! Toast surface.
//!
//! Toasts are the floating representation of `Kind::Toast` notifications:
//! small cards with a severity-colored accent, stacked in the bottom-right
//! corner, most recent last. Each one can be dismissed on its own.

use super::notification::{Kind, Notification, NotificationId};
use super::store::{Store, Subscription};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// User intent raised by the toast surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Close button of a toast.
    Dismiss(NotificationId),
}

/// Store-derived list of visible toasts.
pub struct ToastList {
    store: Store,
    visible: Rc<RefCell<Vec<Notification>>>,
    _subscription: Subscription,
}

impl fmt::Debug for ToastList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastList")
            .field("visible", &self.visible.borrow().len())
            .finish_non_exhaustive()
    }
}

impl ToastList {
    /// Subscribes to `store` and keeps the toast subset in sync.
    #[must_use]
    pub fn new(store: &Store) -> Self {
        let visible = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&visible);
        let subscription = store.subscribe(move |snapshot| {
            *sink.borrow_mut() = snapshot
                .iter()
                .filter(|n| n.kind() == Kind::Toast)
                .cloned()
                .collect();
        });

        Self {
            store: store.clone(),
            visible,
            _subscription: subscription,
        }
    }

    /// Returns the toasts currently shown, oldest first.
    #[must_use]
    pub fn visible(&self) -> Vec<Notification> {
        self.visible.borrow().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.borrow().is_empty()
    }

    pub fn update(&self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.store.remove(id);
            }
        }
    }

    /// Renders the toast overlay, positioned in the bottom-right corner.
    pub fn view<'a>(&self, i18n: &I18n) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = self
            .visible
            .borrow()
            .iter()
            .map(|notification| view_toast(notification, i18n))
            .collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

/// Renders a single toast: title with optional context, message, close button.
fn view_toast<'a>(notification: &Notification, i18n: &I18n) -> Element<'a, Message> {
    let accent = notification.severity().color();

    let mut title = i18n.tr(notification.severity().title_key());
    if let Some(context) = notification.context() {
        title = format!("{title} ({context})");
    }

    let body = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(title).size(typography::BODY_SM).color(accent))
        .push(
            Text::new(notification.message().to_string())
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().text),
                }),
        );

    let dismiss_button = button(Text::new("×").size(typography::BODY_LG))
        .on_press(Message::Dismiss(notification.id()))
        .padding([0.0, spacing::XXS])
        .style(styles::button::dismiss);

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Top)
        .push(Container::new(body).width(Length::Fill))
        .push(dismiss_button);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(styles::container::card(accent))
        .into()
}
