// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear briefly at the top of the page to report the outcome
//! of an action, then fade away without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - `Notification` descriptor with severity, content, and duration
//! - [`manager`] - `Manager` driving each message through its display phases
//! - [`toast`] - element construction and the stylesheet class contract
//! - [`icons`] - severity-to-icon markup registry
//!
//! # Usage
//!
//! ```
//! use panel_kit::ui::document::Document;
//! use panel_kit::ui::notifications::{Manager, Notification};
//! use std::time::Instant;
//!
//! let mut doc = Document::new();
//! let mut manager = Manager::new();
//!
//! let now = Instant::now();
//! manager.present(&mut doc, &Notification::success("Saved"), now);
//! manager.tick(&mut doc, now);
//! ```
//!
//! # Behavior
//!
//! - Default duration is 3s; a zero duration hands back a [`DismissHandle`]
//! - Hovering pauses the countdown, leaving restarts it from the full duration
//! - The shared container is created on demand and removed once empty

pub mod icons;
pub mod manager;
pub mod notification;
pub mod toast;

pub use icons::IconRegistry;
pub use manager::{DismissHandle, Manager, Phase};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
