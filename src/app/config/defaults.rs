// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **API**: Library backend location and request timeout
//! - **Notifications**: Toast lifetime and timer polling

// ==========================================================================
// API Defaults
// ==========================================================================

/// Backend used when neither the config file nor the environment names one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000";

/// Default per-request timeout (in seconds).
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 10;

/// Minimum request timeout (in seconds).
pub const MIN_API_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_API_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Lifetime of a toast before it is removed (in milliseconds).
pub const DEFAULT_TOAST_DISMISS_MS: u64 = 5000;

/// Interval of the timer tick while dismissals are pending (in milliseconds).
pub const TIMER_TICK_MS: u64 = 100;
