// SPDX-License-Identifier: MPL-2.0
//! `panel_kit` provides the client-side plumbing of a small web control panel.
//!
//! It covers locale-aware translation lookup patched into a document tree,
//! transient toast notifications, and a thin HTTP client with a JSON-or-text
//! response decoder. The pieces are independent; [`app::Page`] wires them
//! together for a typical page.

pub mod app;
pub mod error;
pub mod http;
pub mod i18n;
pub mod ui;
