// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! Page links on the left, language switcher on the right. The language
//! switcher is a single stop in the focus ring; Enter moves to the next
//! available locale.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::notifications::{FocusId, FocusTracker};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Space, Text},
    Element, Length, Theme,
};
use unic_langid::LanguageIdentifier;

pub const HOME_LINK: FocusId = FocusId::new("navbar-home");
pub const BOOKS_LINK: FocusId = FocusId::new("navbar-books");
pub const LANGUAGE: FocusId = FocusId::new("navbar-language");

/// Focus stops contributed by the navbar, in order.
pub const FOCUS_RING: [FocusId; 3] = [HOME_LINK, BOOKS_LINK, LANGUAGE];

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub focus: &'a FocusTracker,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Navigate(Screen),
    SwitchLanguage(LanguageIdentifier),
}

/// Returns the message a focused navbar control triggers on Enter.
pub fn activate(id: FocusId, i18n: &I18n) -> Option<Message> {
    match id {
        HOME_LINK => Some(Message::Navigate(Screen::Home)),
        BOOKS_LINK => Some(Message::Navigate(Screen::Books)),
        LANGUAGE => next_locale(i18n).map(Message::SwitchLanguage),
        _ => None,
    }
}

/// Locale following the current one, wrapping around.
fn next_locale(i18n: &I18n) -> Option<LanguageIdentifier> {
    let locales = &i18n.available_locales;
    if locales.len() < 2 {
        return None;
    }
    let position = locales
        .iter()
        .position(|locale| locale == i18n.current_locale())
        .unwrap_or(0);
    locales.get((position + 1) % locales.len()).cloned()
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let link = |id: FocusId, key: &str, target: Screen| {
        let style: fn(&Theme, button::Status) -> button::Style = if ctx.screen == target {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        button(Text::new(ctx.i18n.tr(key)))
            .on_press(Message::Navigate(target))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::focus_ring(style, ctx.focus.is_focused(id)))
    };

    let mut row = Row::new()
        .spacing(spacing::XS)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(link(HOME_LINK, "navbar-home", Screen::Home))
        .push(link(BOOKS_LINK, "navbar-books", Screen::Books))
        .push(Space::new().width(Length::Fill));

    let language_focused = ctx.focus.is_focused(LANGUAGE);
    for locale in &ctx.i18n.available_locales {
        let active = locale == ctx.i18n.current_locale();
        let style: fn(&Theme, button::Status) -> button::Style = if active {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        let label = ctx.i18n.tr(&format!("language-{locale}"));
        row = row.push(
            button(Text::new(label))
                .on_press(Message::SwitchLanguage(locale.clone()))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::focus_ring(style, active && language_focused)),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}
