// SPDX-License-Identifier: MPL-2.0
//! `bookshelf` is a small library client built with the Iced GUI framework.
//!
//! It lists the catalogue of a library API and shows the signed-in reader,
//! and reports what happens through a notification subsystem: an ordered
//! log rendered as toasts, inline banners and modal dialogs.

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
