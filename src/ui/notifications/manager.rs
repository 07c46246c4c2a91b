// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` mounts one element per notification and moves each through
//! its display phases:
//!
//! ```text
//! Entering -> FadingIn -> Shown -> FadingOut -> (removed)
//!                           ^  |
//!             pointer_leave |  v pointer_enter
//!                          Hovered
//! ```
//!
//! Time only advances through [`Manager::tick`], so any scheduler can drive
//! it. Each message owns its own deadline; no ordering is promised between
//! messages leaving at the same time.

use super::icons::IconRegistry;
use super::notification::{Notification, NotificationId};
use super::toast::{Toast, FADE_CLASS};
use crate::app::config::NOTIFICATION_FADE_MS;
use crate::ui::target::MountTarget;
use std::time::{Duration, Instant};

/// Display phase of a mounted notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Mounted with the fade class; becomes visible on the next tick.
    Entering { since: Instant },
    /// Fade class cleared, entrance transition running.
    FadingIn { done_at: Instant },
    /// Fully visible. `None` means it waits for an explicit dismissal.
    Shown { deadline: Option<Instant> },
    /// Pointer is over the message; its deadline is cancelled.
    Hovered,
    /// Exit transition running; the element is removed at `done_at`.
    FadingOut { done_at: Instant },
}

impl Phase {
    /// When this phase wants the next tick, if it is waiting on time at all.
    fn wake_at(&self) -> Option<Instant> {
        match *self {
            Phase::Entering { since } => Some(since),
            Phase::FadingIn { done_at } | Phase::FadingOut { done_at } => Some(done_at),
            Phase::Shown { deadline } => deadline,
            Phase::Hovered => None,
        }
    }
}

/// Lets the caller close a notification that never dismisses itself.
///
/// Returned by [`Manager::present`] for zero-duration notifications.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a persistent notification stays on screen until this handle is used"]
pub struct DismissHandle {
    id: NotificationId,
}

impl DismissHandle {
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }
}

#[derive(Debug)]
struct Active<N> {
    id: NotificationId,
    node: N,
    duration: Duration,
    phase: Phase,
}

impl<N: Copy> Active<N> {
    /// Applies every transition due by `now`. Returns `true` once the exit
    /// transition has finished.
    fn advance<T>(&mut self, target: &mut T, now: Instant, fade: Duration) -> bool
    where
        T: MountTarget<Node = N>,
    {
        loop {
            self.phase = match self.phase {
                Phase::Entering { .. } => {
                    target.remove_class(self.node, FADE_CLASS);
                    Phase::FadingIn {
                        done_at: now.checked_add(fade).unwrap_or(now),
                    }
                }
                // A deadline past the clock's range counts as no deadline.
                Phase::FadingIn { done_at } if now >= done_at => Phase::Shown {
                    deadline: if self.duration.is_zero() {
                        None
                    } else {
                        done_at.checked_add(self.duration)
                    },
                },
                Phase::Shown {
                    deadline: Some(deadline),
                } if now >= deadline => {
                    target.add_class(self.node, FADE_CLASS);
                    Phase::FadingOut {
                        done_at: deadline.checked_add(fade).unwrap_or(deadline),
                    }
                }
                Phase::FadingOut { done_at } if now >= done_at => return true,
                _ => return false,
            };
            tracing::trace!(id = ?self.id, phase = ?self.phase, "notification transition");
        }
    }
}

/// Mounts notifications and drives their timed lifecycle.
#[derive(Debug)]
pub struct Manager<N> {
    active: Vec<Active<N>>,
    icons: IconRegistry,
    fade: Duration,
}

impl<N> Default for Manager<N> {
    fn default() -> Self {
        Self {
            active: Vec::new(),
            icons: IconRegistry::default(),
            fade: Duration::from_millis(NOTIFICATION_FADE_MS),
        }
    }
}

impl<N: Copy + Eq> Manager<N> {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the icon set used for new notifications.
    #[must_use]
    pub fn with_icons(mut self, icons: IconRegistry) -> Self {
        self.icons = icons;
        self
    }

    /// Overrides the fade-in/fade-out transition length.
    #[must_use]
    pub fn with_fade(mut self, fade: Duration) -> Self {
        self.fade = fade;
        self
    }

    /// Shows `notification`.
    ///
    /// Returns a [`DismissHandle`] when the notification has a zero duration
    /// and therefore never leaves on its own; `None` otherwise.
    pub fn present<T>(
        &mut self,
        target: &mut T,
        notification: &Notification,
        now: Instant,
    ) -> Option<DismissHandle>
    where
        T: MountTarget<Node = N>,
    {
        let node = Toast::mount(target, notification, &self.icons);
        let id = NotificationId::new();
        self.active.push(Active {
            id,
            node,
            duration: notification.display_duration(),
            phase: Phase::Entering { since: now },
        });
        tracing::debug!(?id, severity = notification.severity().as_str(), "notification presented");

        (!notification.auto_dismisses()).then_some(DismissHandle { id })
    }

    /// Advances every notification to `now`, removing those whose exit
    /// transition has finished.
    pub fn tick<T>(&mut self, target: &mut T, now: Instant)
    where
        T: MountTarget<Node = N>,
    {
        let fade = self.fade;
        let mut finished = Vec::new();
        self.active.retain_mut(|active| {
            let done = active.advance(target, now, fade);
            if done {
                finished.push(active.node);
            }
            !done
        });
        for node in finished {
            Toast::unmount(target, node);
        }
    }

    /// Starts the exit transition of a persistent notification.
    ///
    /// Returns `false` if it is already leaving or gone.
    pub fn dismiss<T>(&mut self, target: &mut T, handle: DismissHandle, now: Instant) -> bool
    where
        T: MountTarget<Node = N>,
    {
        self.dismiss_id(target, handle.id, now)
    }

    /// Starts the exit transition of any notification by ID.
    pub fn dismiss_id<T>(&mut self, target: &mut T, id: NotificationId, now: Instant) -> bool
    where
        T: MountTarget<Node = N>,
    {
        let fade = self.fade;
        match self.find_mut(id) {
            Some(active) if !matches!(active.phase, Phase::FadingOut { .. }) => {
                target.add_class(active.node, FADE_CLASS);
                active.phase = Phase::FadingOut {
                    done_at: now.checked_add(fade).unwrap_or(now),
                };
                true
            }
            _ => false,
        }
    }

    /// Pointer entered the message: cancel its pending auto-dismiss.
    ///
    /// Only fully shown, self-dismissing messages react.
    pub fn pointer_enter(&mut self, id: NotificationId) {
        if let Some(active) = self.find_mut(id) {
            if let Phase::Shown { deadline: Some(_) } = active.phase {
                active.phase = Phase::Hovered;
            }
        }
    }

    /// Pointer left the message: start a fresh full-length countdown.
    pub fn pointer_leave(&mut self, id: NotificationId, now: Instant) {
        if let Some(active) = self.find_mut(id) {
            if active.phase == Phase::Hovered {
                active.phase = Phase::Shown {
                    deadline: now.checked_add(active.duration),
                };
            }
        }
    }

    /// Earliest instant at which [`tick`](Self::tick) has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.active.iter().filter_map(|a| a.phase.wake_at()).min()
    }

    #[must_use]
    pub fn phase(&self, id: NotificationId) -> Option<Phase> {
        self.active.iter().find(|a| a.id == id).map(|a| a.phase)
    }

    /// The element displaying notification `id`.
    #[must_use]
    pub fn node(&self, id: NotificationId) -> Option<N> {
        self.active.iter().find(|a| a.id == id).map(|a| a.node)
    }

    /// Finds the notification displayed by `node`, e.g. for pointer events.
    #[must_use]
    pub fn id_for_node(&self, node: N) -> Option<NotificationId> {
        self.active.iter().find(|a| a.node == node).map(|a| a.id)
    }

    /// IDs of mounted notifications, oldest first.
    pub fn ids(&self) -> impl Iterator<Item = NotificationId> + '_ {
        self.active.iter().map(|a| a.id)
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.active.is_empty()
    }

    fn find_mut(&mut self, id: NotificationId) -> Option<&mut Active<N>> {
        self.active.iter_mut().find(|a| a.id == id)
    }
}
