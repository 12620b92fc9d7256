// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in `application::port`.
//!
//! - [`http`]: Library API over HTTP (implements [`LibraryRepository`])
//!
//! [`LibraryRepository`]: crate::application::port::LibraryRepository

pub mod http;

pub use http::HttpLibrary;
