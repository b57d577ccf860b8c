//! Tree structure and queries
//!
//! Children are ordered; queries walk depth-first, so results come back in
//! document order. Traversal clones the child list before descending, which
//! keeps each node's lock held only while that node is inspected.

use crate::element::Element;

impl Element {
    /// Append a child as the last child of this node.
    pub fn append(&self, child: Element) {
        self.inner.write().children.push(child);
    }

    /// Insert `new` as a sibling immediately after `anchor`.
    ///
    /// Returns false and leaves the tree unchanged if `anchor` is not a
    /// direct child of this node.
    pub fn insert_after(&self, anchor: &Element, new: Element) -> bool {
        let mut inner = self.inner.write();
        match inner.children.iter().position(|c| c == anchor) {
            Some(index) => {
                inner.children.insert(index + 1, new);
                true
            }
            None => false,
        }
    }

    pub fn children(&self) -> Vec<Element> {
        self.inner.read().children.clone()
    }

    /// Find the direct parent of `node` within this subtree, this node
    /// included as a candidate parent.
    pub fn parent_of(&self, node: &Element) -> Option<Element> {
        if self.children().iter().any(|c| c == node) {
            return Some(self.clone());
        }
        for child in self.children() {
            if let Some(found) = child.parent_of(node) {
                return Some(found);
            }
        }
        None
    }

    /// Find the first element with the given id, this node included.
    pub fn element_by_id(&self, id: &str) -> Option<Element> {
        if self.id().as_deref() == Some(id) {
            return Some(self.clone());
        }
        for child in self.children() {
            if let Some(found) = child.element_by_id(id) {
                return Some(found);
            }
        }
        None
    }

    /// Collect every descendant carrying the given class, in document order.
    /// This node itself is not considered.
    pub fn select_class(&self, class: &str) -> Vec<Element> {
        let mut found = Vec::new();
        for child in self.children() {
            child.collect_class(class, &mut found);
        }
        found
    }

    fn collect_class(&self, class: &str, found: &mut Vec<Element>) {
        if self.has_class(class) {
            found.push(self.clone());
        }
        for child in self.children() {
            child.collect_class(class, found);
        }
    }
}
