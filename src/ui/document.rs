// SPDX-License-Identifier: MPL-2.0
//! In-memory element tree.
//!
//! `Document` is a small arena of elements with attributes, classes, and
//! either text, markup, or child elements as content. Markup is stored as an
//! opaque string; nothing here parses or sanitizes it.

use super::target::{MountTarget, RenderTarget};
use indexmap::IndexMap;

/// Handle to an element inside a [`Document`].
///
/// Slots are reused once an element is removed; the generation tells a stale
/// handle apart from the slot's new occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

/// What an element displays besides its child elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    Empty,
    Text(String),
    Markup(String),
}

#[derive(Debug, Clone)]
struct Element {
    tag: String,
    attributes: IndexMap<String, String>,
    classes: Vec<String>,
    content: Content,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: IndexMap::new(),
            classes: Vec::new(),
            content: Content::Empty,
            children: Vec::new(),
            parent: None,
        }
    }
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    element: Option<Element>,
}

/// An element tree rooted at a `body` element.
#[derive(Debug, Clone)]
pub struct Document {
    slots: Vec<Slot>,
    // Reuse indices of removed elements.
    free_slots: Vec<usize>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: vec![Slot {
                generation: 0,
                element: Some(Element::new("body")),
            }],
            free_slots: Vec::new(),
            root: NodeId {
                index: 0,
                generation: 0,
            },
        }
    }

    /// Creates an element, applies `attributes`, and appends it to `parent`.
    pub fn append_element(
        &mut self,
        parent: NodeId,
        tag: &str,
        attributes: &[(&str, &str)],
    ) -> NodeId {
        let node = self.create_element(tag);
        for (name, value) in attributes {
            self.set_attribute(node, name, value);
        }
        self.append_child(parent, node);
        node
    }

    /// Returns `true` while `node` exists, attached or not.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.element(node).is_some()
    }

    /// Returns `true` if `node` is reachable from the root.
    #[must_use]
    pub fn is_attached(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == self.root {
                return true;
            }
            current = self.element(id).and_then(|el| el.parent);
        }
        false
    }

    #[must_use]
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(|el| el.tag.as_str())
    }

    #[must_use]
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)
            .and_then(|el| el.attributes.get(name))
            .map(String::as_str)
    }

    #[must_use]
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node)
            .is_some_and(|el| el.classes.iter().any(|c| c == class))
    }

    #[must_use]
    pub fn content(&self, node: NodeId) -> Option<&Content> {
        self.element(node).map(|el| &el.content)
    }

    /// The element's text, if it currently holds text content.
    #[must_use]
    pub fn text(&self, node: NodeId) -> Option<&str> {
        match self.content(node)? {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The element's markup, if it currently holds markup content.
    #[must_use]
    pub fn markup(&self, node: NodeId) -> Option<&str> {
        match self.content(node)? {
            Content::Markup(markup) => Some(markup),
            _ => None,
        }
    }

    /// Number of storage slots, occupied or vacant.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of elements currently alive, attached or not.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.slots.len() - self.free_slots.len()
    }

    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.element(node)
            .map(|el| el.children.as_slice())
            .unwrap_or(&[])
    }

    fn element(&self, node: NodeId) -> Option<&Element> {
        self.slots
            .get(node.index)
            .filter(|slot| slot.generation == node.generation)
            .and_then(|slot| slot.element.as_ref())
    }

    fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.slots
            .get_mut(node.index)
            .filter(|slot| slot.generation == node.generation)
            .and_then(|slot| slot.element.as_mut())
    }

    /// Vacates the slot of `node` and returns its element.
    fn release(&mut self, node: NodeId) -> Option<Element> {
        let slot = self
            .slots
            .get_mut(node.index)
            .filter(|slot| slot.generation == node.generation)?;
        let element = slot.element.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_slots.push(node.index);
        Some(element)
    }

    /// Returns `true` if `ancestor` is `node` or one of its parents.
    fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.element(id).and_then(|el| el.parent);
        }
        false
    }

    fn detach(&mut self, node: NodeId) {
        let parent = self.element_mut(node).and_then(|el| el.parent.take());
        if let Some(parent) = parent.and_then(|p| self.element_mut(p)) {
            parent.children.retain(|&child| child != node);
        }
    }

    fn drop_subtree(&mut self, node: NodeId) {
        let mut pending = vec![node];
        while let Some(id) = pending.pop() {
            if let Some(el) = self.release(id) {
                pending.extend(el.children);
            }
        }
    }

    fn replace_content(&mut self, node: NodeId, content: Content) {
        let Some(el) = self.element_mut(node) else {
            return;
        };
        el.content = content;
        let children = std::mem::take(&mut el.children);
        for child in children {
            self.drop_subtree(child);
        }
    }

    /// Pre-order walk of `start` and its descendants.
    fn walk(&self, start: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut pending = vec![start];
        while let Some(id) = pending.pop() {
            if let Some(el) = self.element(id) {
                order.push(id);
                pending.extend(el.children.iter().rev().copied());
            }
        }
        order
    }
}

impl RenderTarget for Document {
    type Node = NodeId;

    fn find_marked(&self, scope: Option<NodeId>, attribute: &str) -> Vec<(NodeId, String)> {
        let (start, skip) = match scope {
            Some(scope) => (scope, 1),
            None => (self.root, 0),
        };
        self.walk(start)
            .into_iter()
            .skip(skip)
            .filter_map(|id| {
                self.attribute(id, attribute)
                    .map(|value| (id, value.to_string()))
            })
            .collect()
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        self.replace_content(node, Content::Text(text.to_string()));
    }

    fn set_markup(&mut self, node: NodeId, markup: &str) {
        self.replace_content(node, Content::Markup(markup.to_string()));
    }
}

impl MountTarget for Document {
    fn body(&self) -> NodeId {
        self.root
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.walk(self.root)
            .into_iter()
            .find(|&node| self.attribute(node, "id") == Some(id))
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        if let Some(index) = self.free_slots.pop() {
            let slot = &mut self.slots[index];
            slot.element = Some(Element::new(tag));
            return NodeId {
                index,
                generation: slot.generation,
            };
        }
        self.slots.push(Slot {
            generation: 0,
            element: Some(Element::new(tag)),
        });
        NodeId {
            index: self.slots.len() - 1,
            generation: 0,
        }
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(el) = self.element_mut(node) {
            el.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.element_mut(node) {
            if !el.classes.iter().any(|c| c == class) {
                el.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.element_mut(node) {
            el.classes.retain(|c| c != class);
        }
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        // Appending an ancestor below itself would make a cycle.
        if !self.contains(parent)
            || !self.contains(child)
            || self.is_ancestor_or_self(child, parent)
        {
            return;
        }
        self.detach(child);
        if let Some(el) = self.element_mut(child) {
            el.parent = Some(parent);
        }
        if let Some(el) = self.element_mut(parent) {
            el.children.push(child);
        }
    }

    fn remove(&mut self, node: NodeId) {
        if node == self.root {
            return;
        }
        self.detach(node);
        self.drop_subtree(node);
    }

    fn child_count(&self, node: NodeId) -> usize {
        self.children(node).len()
    }
}
