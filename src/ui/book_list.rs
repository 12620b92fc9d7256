// SPDX-License-Identifier: MPL-2.0
//! Books page: the catalogue with a refresh button.

use crate::domain::Book;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{FocusId, FocusTracker};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

pub const REFRESH: FocusId = FocusId::new("books-refresh");

/// Focus stops of the page, in order.
pub const FOCUS_RING: [FocusId; 1] = [REFRESH];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Refresh,
}

/// Returns the message a focused control triggers on Enter.
#[must_use]
pub fn activate(id: FocusId) -> Option<Message> {
    (id == REFRESH).then_some(Message::Refresh)
}

/// Contextual data needed to render the page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub focus: &'a FocusTracker,
}

/// Loaded books and the in-flight flag.
#[derive(Debug, Default)]
pub struct State {
    books: Vec<Book>,
    loading: bool,
}

impl State {
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Marks a load as started. Returns false if one is already running.
    pub fn begin_loading(&mut self) -> bool {
        !std::mem::replace(&mut self.loading, true)
    }

    /// Ends the running load, successful or not.
    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    pub fn set_books(&mut self, books: Vec<Book>) {
        self.books = books;
    }

    pub fn view<'a>(&self, ctx: ViewContext<'_>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let refresh_label = if self.loading {
            "books-refreshing"
        } else {
            "books-refresh"
        };
        let mut refresh = button(Text::new(i18n.tr(refresh_label)))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::focus_ring(
                styles::button::primary,
                ctx.focus.is_focused(REFRESH),
            ));
        if !self.loading {
            refresh = refresh.on_press(Message::Refresh);
        }

        let header = Row::new()
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(Text::new(i18n.tr("books-title")).size(typography::TITLE_LG))
                    .width(Length::Fill),
            )
            .push(refresh);

        let body: Element<'a, Message> = if self.books.is_empty() {
            let key = if self.loading {
                "books-loading"
            } else {
                "books-empty"
            };
            Text::new(i18n.tr(key)).size(typography::BODY).into()
        } else {
            self.books
                .iter()
                .fold(Column::new().spacing(spacing::XS), |list, book| {
                    list.push(view_book(book, i18n))
                })
                .into()
        };

        Column::new()
            .spacing(spacing::MD)
            .width(Length::Fill)
            .push(header)
            .push(body)
            .into()
    }
}

fn view_book<'a>(book: &Book, i18n: &I18n) -> Element<'a, Message> {
    let author = i18n.tr_with_args("books-author", &[("author", book.author.name.as_str())]);

    Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(book.title.clone()).size(typography::BODY_LG))
            .push(
                Text::new(author)
                    .size(typography::BODY_SM)
                    .style(|theme: &Theme| iced::widget::text::Style {
                        color: Some(theme.extended_palette().background.weak.text),
                    }),
            ),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::container::panel)
    .into()
}
