// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page (navbar plus current screen) sits at the bottom of a stack; the
//! toast overlay and the modal layer are stacked on top of it.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::notifications::{FocusTracker, ModalSurface, ToastList};
use crate::ui::{book_list, home, navbar};
use iced::widget::{scrollable, Column, Container, Stack};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub focus: &'a FocusTracker,
    pub home: &'a home::State,
    pub books: &'a book_list::State,
    pub toasts: &'a ToastList,
    pub modal: &'a ModalSurface,
}

/// Renders the current screen with its overlays.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        screen: ctx.screen,
        focus: ctx.focus,
    })
    .map(Message::Navbar);

    let page: Element<'_, Message> = match ctx.screen {
        Screen::Home => ctx
            .home
            .view(home::ViewContext {
                i18n: ctx.i18n,
                focus: ctx.focus,
            })
            .map(Message::Home),
        Screen::Books => ctx
            .books
            .view(book_list::ViewContext {
                i18n: ctx.i18n,
                focus: ctx.focus,
            })
            .map(Message::Books),
    };

    let content = Container::new(
        Container::new(page)
            .max_width(sizing::CONTENT_WIDTH)
            .padding(spacing::LG),
    )
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center);

    let layout = Column::new()
        .push(navbar_view)
        .push(scrollable(content).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(layout)
        .push(ctx.toasts.view(ctx.i18n).map(Message::Toast));

    if let Some(dialog) = ctx.modal.view(ctx.i18n) {
        stack = stack.push(dialog.map(Message::Modal));
    }

    stack.into()
}
