// SPDX-License-Identifier: MPL-2.0
//! Rendering seams and notification UI.
//!
//! - [`target`] - `RenderTarget`/`MountTarget` traits the UI logic writes through
//! - [`document`] - in-memory element tree implementing both traits
//! - [`notifications`] - toast notification system for user feedback

pub mod document;
pub mod notifications;
pub mod target;
