// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! A [`Notification`] is the descriptor handed to the presenter: what kind of
//! message it is, what it says, whether the content is markup, and how long
//! it stays up. Every field has a default, including when deserialized.

use crate::app::config::DEFAULT_NOTIFICATION_DURATION_MS;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind of message; selects the icon shown next to the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Success,
        Severity::Warning,
        Severity::Error,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// Describes one transient message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notification {
    #[serde(rename = "type")]
    severity: Severity,
    content: String,
    /// Inject `content` as markup instead of text.
    html: bool,
    /// Time on screen; zero disables auto-dismiss.
    #[serde(with = "duration_ms")]
    duration: Duration,
}

impl Default for Notification {
    fn default() -> Self {
        Self {
            severity: Severity::default(),
            content: String::new(),
            html: false,
            duration: Duration::from_millis(DEFAULT_NOTIFICATION_DURATION_MS),
        }
    }
}

impl Notification {
    /// Creates a text notification with the default duration.
    pub fn new(severity: Severity, content: impl Into<String>) -> Self {
        Self {
            severity,
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self::new(Severity::Info, content)
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::new(Severity::Success, content)
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self::new(Severity::Warning, content)
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self::new(Severity::Error, content)
    }

    /// Marks the content as trusted markup.
    ///
    /// Nothing sanitizes it on the way to the screen.
    #[must_use]
    pub fn html(mut self) -> Self {
        self.html = true;
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Keeps the notification up until it is dismissed explicitly.
    #[must_use]
    pub fn persistent(self) -> Self {
        self.duration(Duration::ZERO)
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn is_html(&self) -> bool {
        self.html
    }

    #[must_use]
    pub fn display_duration(&self) -> Duration {
        self.duration
    }

    /// Returns whether the presenter will remove this notification on its own.
    #[must_use]
    pub fn auto_dismisses(&self) -> bool {
        !self.duration.is_zero()
    }
}

mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
