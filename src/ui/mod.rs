// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`home`] - Reader profile and notification playground
//! - [`book_list`] - Catalogue with refresh
//!
//! # Shared Infrastructure
//!
//! - [`notifications`] - Notification store, service and surfaces
//! - [`navbar`] - Page links and language switcher
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod book_list;
pub mod design_tokens;
pub mod home;
pub mod navbar;
pub mod notifications;
pub mod styles;
pub mod theming;
