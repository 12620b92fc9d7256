// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, keeping the UI independent of the HTTP
//! client.
//!
//! # Available Ports
//!
//! - [`library`]: Catalogue and reader loading

pub mod library;

pub use library::{FetchError, FetchFuture, LibraryRepository};
