// SPDX-License-Identifier: MPL-2.0
//! Seams between the UI logic and whatever actually displays it.
//!
//! The translation applicator only needs [`RenderTarget`]. The notification
//! presenter also builds and tears down elements, so it asks for
//! [`MountTarget`]. [`Document`](super::document::Document) implements both
//! in memory; a browser or native binding can implement them over a real tree.

/// Lookup and content writes on a tree of elements.
pub trait RenderTarget {
    /// Handle to one element. Handles stay valid until the element is removed.
    type Node: Copy + Eq + std::fmt::Debug;

    /// Returns every element under `scope` carrying `attribute`, paired with
    /// the attribute value, in document order.
    ///
    /// `None` searches the whole tree including its root. With `Some(scope)`
    /// only descendants of `scope` are considered.
    fn find_marked(&self, scope: Option<Self::Node>, attribute: &str) -> Vec<(Self::Node, String)>;

    /// Replaces the element's content with escaped text.
    fn set_text(&mut self, node: Self::Node, text: &str);

    /// Replaces the element's content with trusted markup.
    fn set_markup(&mut self, node: Self::Node, markup: &str);
}

/// Structural edits needed to mount transient elements.
pub trait MountTarget: RenderTarget {
    /// The element new top-level containers are appended to.
    fn body(&self) -> Self::Node;

    /// Finds an attached element by its `id` attribute.
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// Creates a detached element.
    fn create_element(&mut self, tag: &str) -> Self::Node;

    fn set_attribute(&mut self, node: Self::Node, name: &str, value: &str);

    fn add_class(&mut self, node: Self::Node, class: &str);

    fn remove_class(&mut self, node: Self::Node, class: &str);

    /// Appends `child` as the last child of `parent`.
    fn append_child(&mut self, parent: Self::Node, child: Self::Node);

    /// Detaches and drops `node` with its whole subtree. Unknown nodes are ignored.
    fn remove(&mut self, node: Self::Node);

    fn child_count(&self, node: Self::Node) -> usize;
}
