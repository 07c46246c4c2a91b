// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Locale**: Fallback locale when nothing better matches
//! - **Notifications**: Display duration and fade timing
//! - **HTTP**: Base URL prepended to request paths

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither the requested tag nor any relative is available.
pub const FALLBACK_LOCALE: &str = "en";

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default time a notification stays on screen before fading out.
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 3000;

/// Length of the fade-in and fade-out transitions.
pub const NOTIFICATION_FADE_MS: u64 = 200;

// ==========================================================================
// HTTP Defaults
// ==========================================================================

/// Base URL of the panel backend, prepended verbatim to every request path.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:9876/";
