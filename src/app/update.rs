// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! Handlers receive an [`UpdateContext`] of mutable borrows instead of the
//! whole `App`, so each one states what it touches.

use super::{KeyPress, Message, Screen};
use crate::application::port::{FetchError, LibraryRepository};
use crate::domain::{Book, User};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{modal, FocusId, FocusTracker, Kind, ModalSurface, Service};
use crate::ui::{book_list, home, navbar};
use iced::Task;
use std::sync::Arc;

/// Context of the library load flows; also the operation name recorded on
/// failure notifications.
pub const LOAD_BOOKS: &str = "loadAllBooks";
pub const LOAD_ME: &str = "loadMe";

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub service: &'a Service,
    pub focus: &'a FocusTracker,
    pub modal: &'a ModalSurface,
    pub home: &'a mut home::State,
    pub books: &'a mut book_list::State,
    pub library: Option<&'a Arc<dyn LibraryRepository>>,
}

/// Focus stops of the page behind any modal.
pub fn page_focus_ring(screen: Screen) -> Vec<FocusId> {
    let mut ring = navbar::FOCUS_RING.to_vec();
    match screen {
        Screen::Home => ring.extend(home::focus_ring()),
        Screen::Books => ring.extend(book_list::FOCUS_RING),
    }
    ring
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match message {
        navbar::Message::Navigate(target) => handle_screen_switch(ctx, target),
        navbar::Message::SwitchLanguage(locale) => {
            log::info!("switching language to {locale}");
            ctx.i18n.set_locale(locale);
            Task::none()
        }
    }
}

/// Shows `target` and starts the load its page runs on entry.
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    *ctx.screen = target;

    if let Some(focused) = ctx.focus.focused() {
        if !page_focus_ring(target).contains(&focused) {
            ctx.focus.blur();
        }
    }

    match target {
        Screen::Home => load_me(ctx.library),
        Screen::Books => load_books(ctx),
    }
}

pub fn handle_books_message(ctx: &mut UpdateContext<'_>, message: book_list::Message) -> Task<Message> {
    match message {
        book_list::Message::Refresh => load_books(ctx),
    }
}

/// Starts fetching the catalogue unless a fetch is already running.
pub fn load_books(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if !ctx.books.begin_loading() {
        return Task::none();
    }
    match ctx.library {
        Some(library) => Task::perform(library.books(), Message::BooksLoaded),
        None => Task::done(Message::BooksLoaded(Err(unavailable()))),
    }
}

/// Starts fetching the signed-in reader.
pub fn load_me(library: Option<&Arc<dyn LibraryRepository>>) -> Task<Message> {
    match library {
        Some(library) => Task::perform(library.me(), Message::MeLoaded),
        None => Task::done(Message::MeLoaded(Err(unavailable()))),
    }
}

fn unavailable() -> FetchError {
    FetchError::Network("library client is not available".to_string())
}

/// Describes the error body of a failed load, for the log.
fn response_detail(context: &str, err: &FetchError) -> Option<String> {
    err.body().map(|body| format!("{context}: server replied {body}"))
}

fn log_response_detail(context: &str, result: &Result<impl Sized, FetchError>) {
    if let Some(detail) = result.as_ref().err().and_then(|e| response_detail(context, e)) {
        log::warn!("{detail}");
    }
}

pub fn handle_books_loaded(ctx: &mut UpdateContext<'_>, result: Result<Vec<Book>, FetchError>) {
    ctx.books.finish_loading();
    log_response_detail(LOAD_BOOKS, &result);
    match ctx.service.report(result, Kind::Toast, Some(LOAD_BOOKS)) {
        Ok(books) => {
            log::debug!("loaded {} book(s)", books.len());
            ctx.books.set_books(books);
        }
        Err(err) => log::error!("{err}"),
    }
}

pub fn handle_me_loaded(ctx: &mut UpdateContext<'_>, result: Result<User, FetchError>) {
    log_response_detail(LOAD_ME, &result);
    match ctx.service.report(result, Kind::Toast, Some(LOAD_ME)) {
        Ok(user) => ctx.home.set_me(user),
        Err(err) => log::error!("{err}"),
    }
}

/// Routes a navigation key to the modal when one is displayed, otherwise to
/// the page focus ring. Returns the message of a control activated by Enter.
pub fn handle_key(ctx: &mut UpdateContext<'_>, key: KeyPress) -> Option<Message> {
    if ctx.modal.is_displaying() {
        ctx.modal.update(match key {
            KeyPress::Tab { backwards } => modal::Message::Tab { backwards },
            KeyPress::Enter => modal::Message::Enter,
            KeyPress::Escape => modal::Message::Escape,
        });
        return None;
    }

    match key {
        KeyPress::Tab { backwards } => {
            ctx.focus.cycle(&page_focus_ring(*ctx.screen), backwards);
            None
        }
        KeyPress::Escape => {
            ctx.focus.blur();
            None
        }
        KeyPress::Enter => {
            let focused = ctx.focus.focused()?;
            if let Some(message) = navbar::activate(focused, ctx.i18n) {
                return Some(Message::Navbar(message));
            }
            match *ctx.screen {
                Screen::Home => home::activate(focused).map(Message::Home),
                Screen::Books => book_list::activate(focused).map(Message::Books),
            }
        }
    }
}
