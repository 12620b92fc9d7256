// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the pages and the
//! notification surfaces.
//!
//! The `App` struct wires together the notification subsystem (store, service,
//! toast list, modal), localization and the library client, and translates
//! messages into side effects like fetches or focus moves.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, KeyPress, Message};
pub use screen::Screen;
pub use update::{LOAD_BOOKS, LOAD_ME};

use crate::application::port::LibraryRepository;
use crate::i18n::fluent::I18n;
use crate::infrastructure::HttpLibrary;
use crate::ui::book_list;
use crate::ui::home;
use crate::ui::notifications::{FocusTracker, ModalSurface, Service, Severity, Store, ToastList};
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    theme_mode: ThemeMode,
    service: Service,
    focus: FocusTracker,
    toasts: ToastList,
    modal: ModalSurface,
    home: home::State,
    books: book_list::State,
    library: Option<Arc<dyn LibraryRepository>>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("notifications", &self.service.store().len())
            .field("modal", &self.modal.is_displaying())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 560;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires Fn for boot; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration, builds the library client and starts loading
    /// the reader's profile.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir.clone());
        let i18n = I18n::new(flags.lang.clone(), &config);

        let base_url = config::resolve_api_base_url(flags.api_base_url.clone(), &config);
        let library = match HttpLibrary::new(&base_url, config.api.timeout()) {
            Ok(client) => {
                log::info!("library API at {base_url}");
                Some(Arc::new(client) as Arc<dyn LibraryRepository>)
            }
            Err(err) => {
                log::error!("cannot build library client for {base_url}: {err}");
                None
            }
        };

        let mut app = Self::with_library(&config, i18n, library);
        if let Some(key) = config_warning {
            let message = app.i18n.tr(&key);
            app.service.show_toast(message, Severity::Warning, None);
        }

        let task = update::load_me(app.library.as_ref());
        (app, task)
    }

    /// Assembles the application around an existing library client.
    pub fn with_library(
        config: &Config,
        i18n: I18n,
        library: Option<Arc<dyn LibraryRepository>>,
    ) -> Self {
        let store = Store::new();
        let focus = FocusTracker::new();

        Self {
            i18n,
            screen: Screen::default(),
            theme_mode: config.general.theme_mode,
            toasts: ToastList::new(&store),
            modal: ModalSurface::new(&store, &focus),
            home: home::State::new(&store),
            books: book_list::State::default(),
            service: Service::new(store),
            focus,
            library,
        }
    }

    /// Returns the notification service shared with the pages.
    #[must_use]
    pub fn service(&self) -> &Service {
        &self.service
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn focus(&self) -> &FocusTracker {
        &self.focus
    }

    #[must_use]
    pub fn modal(&self) -> &ModalSurface {
        &self.modal
    }

    #[must_use]
    pub fn toasts(&self) -> &ToastList {
        &self.toasts
    }

    #[must_use]
    pub fn home(&self) -> &home::State {
        &self.home
    }

    #[must_use]
    pub fn books(&self) -> &book_list::State {
        &self.books
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.service.has_pending_timers());

        Subscription::batch([event_sub, tick_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            service: &self.service,
            focus: &self.focus,
            modal: &self.modal,
            home: &mut self.home,
            books: &mut self.books,
            library: self.library.as_ref(),
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Home(home_message) => {
                ctx.home.update(home_message, ctx.service, ctx.i18n);
                Task::none()
            }
            Message::Books(books_message) => {
                update::handle_books_message(&mut ctx, books_message)
            }
            Message::Toast(toast_message) => {
                self.toasts.update(toast_message);
                Task::none()
            }
            Message::Modal(modal_message) => {
                self.modal.update(modal_message);
                Task::none()
            }
            Message::Key(key) => match update::handle_key(&mut ctx, key) {
                Some(activated) => self.update(activated),
                None => Task::none(),
            },
            Message::BooksLoaded(result) => {
                update::handle_books_loaded(&mut ctx, result);
                Task::none()
            }
            Message::MeLoaded(result) => {
                update::handle_me_loaded(&mut ctx, result);
                Task::none()
            }
            Message::Tick(now) => {
                self.service.tick(now);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            focus: &self.focus,
            home: &self.home,
            books: &self.books,
            toasts: &self.toasts,
            modal: &self.modal,
        })
    }
}
