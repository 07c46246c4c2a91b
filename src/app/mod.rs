// SPDX-License-Identifier: MPL-2.0
//! Page root state and wiring between localization, notifications, and HTTP.
//!
//! The `Page` owns everything a panel page needs at runtime: the render
//! target, the translation registry, the locale derived once at start-up,
//! the notification manager, and the HTTP client. The components themselves
//! know nothing about each other; this is the only place they meet.

pub mod config;
pub mod paths;

use crate::error::Result;
use crate::http::Client;
use crate::i18n::{self, LocaleTag, Registry};
use crate::ui::document::Document;
use crate::ui::notifications::{DismissHandle, Manager, Notification, Severity};
use crate::ui::target::MountTarget;
use config::{Config, NotificationConfig};
use std::time::Instant;

/// Root state of one page.
#[derive(Debug)]
pub struct Page<T: MountTarget = Document> {
    target: T,
    registry: Registry,
    locale: LocaleTag,
    notifications: Manager<T::Node>,
    notification_defaults: NotificationConfig,
    http: Client,
    ready: bool,
}

impl Page<Document> {
    /// Creates a page over an empty in-memory document.
    ///
    /// The locale is derived here, once, from `cli_lang`, the stored
    /// preference, and the system locale, in that order.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &Config, cli_lang: Option<&str>) -> Result<Self> {
        let locale = i18n::detect_locale(cli_lang, config);
        Self::with_target(Document::new(), config, locale)
    }
}

impl<T: MountTarget> Page<T> {
    /// Creates a page over an existing render target with a known locale.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_target(target: T, config: &Config, locale: LocaleTag) -> Result<Self> {
        tracing::debug!(%locale, base_url = %config.http.base_url, "page created");
        Ok(Self {
            target,
            registry: Registry::new(),
            locale,
            notifications: Manager::new(),
            notification_defaults: config.notifications.clone(),
            http: Client::from_config(&config.http)?,
            ready: false,
        })
    }

    #[must_use]
    pub fn locale(&self) -> &LocaleTag {
        &self.locale
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Registry that page modules contribute their translations to.
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    #[must_use]
    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    #[must_use]
    pub fn http(&self) -> &Client {
        &self.http
    }

    pub fn http_mut(&mut self) -> &mut Client {
        &mut self.http
    }

    #[must_use]
    pub fn notifications(&self) -> &Manager<T::Node> {
        &self.notifications
    }

    /// Marks the page interactive and localizes the whole tree.
    ///
    /// Only the first call does any work; it returns the number of elements
    /// written, later calls return 0.
    pub fn ready(&mut self) -> usize {
        if self.ready {
            return 0;
        }
        self.ready = true;
        self.localize(None)
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Localizes `scope`, or the whole tree for `None`.
    ///
    /// Call this after inserting content so late elements get translated too.
    pub fn localize(&mut self, scope: Option<T::Node>) -> usize {
        i18n::apply_translations(&mut self.target, scope, &self.registry, &self.locale)
    }

    /// Translates `key` for the page locale.
    #[must_use]
    pub fn translate(&self, key: &str) -> String {
        self.registry.translate(key, &self.locale)
    }

    /// A text notification using the configured default duration.
    #[must_use]
    pub fn notification(&self, severity: Severity, content: impl Into<String>) -> Notification {
        Notification::new(severity, content).duration(self.notification_defaults.default_duration())
    }

    /// Presents `notification` now.
    pub fn notify(&mut self, notification: &Notification) -> Option<DismissHandle> {
        self.notifications
            .present(&mut self.target, notification, clock_now())
    }

    /// Starts fading out a persistent notification.
    pub fn dismiss(&mut self, handle: DismissHandle) -> bool {
        self.notifications
            .dismiss(&mut self.target, handle, clock_now())
    }

    /// Pointer entered the element `node`; pauses its message if it is one.
    pub fn pointer_enter(&mut self, node: T::Node) {
        if let Some(id) = self.notifications.id_for_node(node) {
            self.notifications.pointer_enter(id);
        }
    }

    /// Pointer left the element `node`; restarts its message countdown.
    pub fn pointer_leave(&mut self, node: T::Node) {
        if let Some(id) = self.notifications.id_for_node(node) {
            self.notifications.pointer_leave(id, clock_now());
        }
    }

    /// Advances notifications to `now`.
    pub fn tick(&mut self, now: Instant) {
        self.notifications.tick(&mut self.target, now);
    }

    /// Sleeps through notification transitions until none is waiting on time.
    ///
    /// Hovered and persistent notifications stay mounted when this returns.
    pub async fn settle_notifications(&mut self) {
        while let Some(deadline) = self.notifications.next_deadline() {
            tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
            self.tick(clock_now());
        }
    }
}

/// Current time on the tokio clock, so paused test runtimes control it.
fn clock_now() -> Instant {
    tokio::time::Instant::now().into_std()
}
