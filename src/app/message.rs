// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::FetchError;
use crate::domain::{Book, User};
use crate::ui::notifications::{modal, toast};
use crate::ui::{book_list, home, navbar};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Home(home::Message),
    Books(book_list::Message),
    Toast(toast::Message),
    Modal(modal::Message),
    /// Keyboard navigation key pressed and not captured by a widget.
    Key(KeyPress),
    BooksLoaded(Result<Vec<Book>, FetchError>),
    MeLoaded(Result<User, FetchError>),
    /// Periodic tick driving toast auto-dismiss.
    Tick(Instant),
}

/// Keys taking part in focus navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Tab { backwards: bool },
    Enter,
    Escape,
}

/// Runtime flags passed from the launcher into the application.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g., `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for `settings.toml`).
    pub config_dir: Option<PathBuf>,
    /// Optional data directory override (for the log file).
    pub data_dir: Option<PathBuf>,
    /// Optional library API base URL override.
    pub api_base_url: Option<String>,
}
