// SPDX-License-Identifier: MPL-2.0
//! Builds the elements that display a notification.
//!
//! Structure produced for each message:
//!
//! ```text
//! <div id="msg-container">
//!   <div class="msg msg-fade">
//!     <span class="msg-icon">{icon markup}</span>
//!     <span>{content}</span>
//!   </div>
//! </div>
//! ```
//!
//! The class names are a contract with the stylesheet, which animates the
//! `msg-fade` toggle.

use super::icons::IconRegistry;
use super::notification::Notification;
use crate::ui::target::MountTarget;

/// `id` of the shared container holding every visible message.
pub const CONTAINER_ID: &str = "msg-container";

/// Class carried by each message element.
pub const MESSAGE_CLASS: &str = "msg";

/// Class present while a message is faded out (before entrance, during exit).
pub const FADE_CLASS: &str = "msg-fade";

/// Class of the icon wrapper.
pub const ICON_CLASS: &str = "msg-icon";

/// Toast element construction.
pub struct Toast;

impl Toast {
    /// Creates the element for `notification` and appends it to the container.
    ///
    /// The element starts faded; the manager clears [`FADE_CLASS`] on the next
    /// tick so the entrance is animated.
    pub fn mount<T: MountTarget>(
        target: &mut T,
        notification: &Notification,
        icons: &IconRegistry,
    ) -> T::Node {
        let container = Self::container(target);

        let message = target.create_element("div");
        target.add_class(message, MESSAGE_CLASS);
        target.add_class(message, FADE_CLASS);

        let icon = target.create_element("span");
        target.add_class(icon, ICON_CLASS);
        target.set_markup(icon, icons.get(notification.severity()));
        target.append_child(message, icon);

        let content = target.create_element("span");
        if notification.is_html() {
            target.set_markup(content, notification.content());
        } else {
            target.set_text(content, notification.content());
        }
        target.append_child(message, content);

        target.append_child(container, message);
        message
    }

    /// Detaches `message`, then drops the container if nothing is left in it.
    pub fn unmount<T: MountTarget>(target: &mut T, message: T::Node) {
        target.remove(message);
        if let Some(container) = target.element_by_id(CONTAINER_ID) {
            if target.child_count(container) == 0 {
                target.remove(container);
            }
        }
    }

    /// Returns the shared container, creating it on first use.
    fn container<T: MountTarget>(target: &mut T) -> T::Node {
        if let Some(existing) = target.element_by_id(CONTAINER_ID) {
            return existing;
        }
        let container = target.create_element("div");
        target.set_attribute(container, "id", CONTAINER_ID);
        let body = target.body();
        target.append_child(body, container);
        container
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::document::Document;

    #[test]
    fn mount_builds_faded_message_inside_container() {
        let mut doc = Document::new();
        let icons = IconRegistry::default();
        let notification = Notification::success("Saved");

        let message = Toast::mount(&mut doc, &notification, &icons);

        let container = doc.element_by_id(CONTAINER_ID).expect("container created");
        assert_eq!(doc.children(container), &[message]);
        assert!(doc.has_class(message, MESSAGE_CLASS));
        assert!(doc.has_class(message, FADE_CLASS));

        let parts = doc.children(message);
        assert_eq!(parts.len(), 2);
        assert!(doc.has_class(parts[0], ICON_CLASS));
        assert_eq!(
            doc.markup(parts[0]),
            Some(icons.get(notification.severity()))
        );
        assert_eq!(doc.text(parts[1]), Some("Saved"));
    }

    #[test]
    fn html_content_is_injected_as_markup() {
        let mut doc = Document::new();
        let message = Toast::mount(
            &mut doc,
            &Notification::info("<b>bold</b>").html(),
            &IconRegistry::default(),
        );
        let content = doc.children(message)[1];
        assert_eq!(doc.markup(content), Some("<b>bold</b>"));
        assert_eq!(doc.text(content), None);
    }

    #[test]
    fn text_content_is_not_markup() {
        let mut doc = Document::new();
        let message = Toast::mount(
            &mut doc,
            &Notification::info("<b>bold</b>"),
            &IconRegistry::default(),
        );
        let content = doc.children(message)[1];
        assert_eq!(doc.text(content), Some("<b>bold</b>"));
    }

    #[test]
    fn container_is_shared_and_released_when_empty() {
        let mut doc = Document::new();
        let icons = IconRegistry::default();
        let first = Toast::mount(&mut doc, &Notification::info("one"), &icons);
        let second = Toast::mount(&mut doc, &Notification::info("two"), &icons);

        let container = doc.element_by_id(CONTAINER_ID).unwrap();
        assert_eq!(doc.children(container), &[first, second]);

        Toast::unmount(&mut doc, first);
        assert_eq!(doc.element_by_id(CONTAINER_ID), Some(container));

        Toast::unmount(&mut doc, second);
        assert_eq!(doc.element_by_id(CONTAINER_ID), None);
    }
}
