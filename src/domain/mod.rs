// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business types with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`library`]: Catalogue types ([`Book`](library::Book), [`Author`](library::Author))
//!   and the signed-in reader ([`User`](library::User))

pub mod library;

pub use library::{Author, Book, User};
