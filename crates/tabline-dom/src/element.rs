//! Element nodes
//!
//! An [`Element`] is a shared handle to one node. Cloning the handle clones
//! the reference, not the node; equality is node identity.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

pub(crate) struct Inner {
    pub(crate) tag: String,
    pub(crate) id: Option<String>,
    /// Style tokens in insertion order, no duplicates.
    pub(crate) classes: Vec<String>,
    /// Inline style properties, e.g. "background-color" or "margin-left".
    pub(crate) styles: BTreeMap<String, String>,
    /// Plain attributes, e.g. "data-target".
    pub(crate) attrs: BTreeMap<String, String>,
    pub(crate) children: Vec<Element>,
}

/// Shared handle to a document node.
#[derive(Clone)]
pub struct Element {
    pub(crate) inner: Arc<RwLock<Inner>>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                tag: tag.into(),
                id: None,
                classes: Vec::new(),
                styles: BTreeMap::new(),
                attrs: BTreeMap::new(),
                children: Vec::new(),
            })),
        }
    }

    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.inner.write().id = Some(id.into());
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn tag(&self) -> String {
        self.inner.read().tag.clone()
    }

    pub fn id(&self) -> Option<String> {
        self.inner.read().id.clone()
    }

    /// Add a style token. Adding a token the node already carries is a no-op.
    pub fn add_class(&self, class: &str) {
        let mut inner = self.inner.write();
        if !inner.classes.iter().any(|c| c == class) {
            inner.classes.push(class.to_string());
        }
    }

    /// Remove a style token. Removing an absent token is a no-op.
    pub fn remove_class(&self, class: &str) {
        self.inner.write().classes.retain(|c| c != class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.inner.read().classes.iter().any(|c| c == class)
    }

    pub fn classes(&self) -> Vec<String> {
        self.inner.read().classes.clone()
    }

    pub fn set_style(&self, name: &str, value: &str) {
        self.inner
            .write()
            .styles
            .insert(name.to_string(), value.to_string());
    }

    pub fn style(&self, name: &str) -> Option<String> {
        self.inner.read().styles.get(name).cloned()
    }

    pub fn set_attr(&self, name: &str, value: &str) {
        self.inner
            .write()
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    pub fn attr(&self, name: &str) -> Option<String> {
        self.inner.read().attrs.get(name).cloned()
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Element {}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read();
        write!(f, "<{}", inner.tag)?;
        if let Some(id) = &inner.id {
            write!(f, " id={:?}", id)?;
        }
        if !inner.classes.is_empty() {
            write!(f, " class={:?}", inner.classes.join(" "))?;
        }
        write!(f, ">")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes() {
        let el = Element::new("div").with_class("tab");

        assert!(el.has_class("tab"));
        assert!(!el.has_class("is-active"));

        el.add_class("is-active");
        el.add_class("is-active"); // duplicate is a no-op
        assert_eq!(el.classes(), vec!["tab", "is-active"]);

        el.remove_class("is-active");
        assert!(!el.has_class("is-active"));

        // Removing an absent token is a no-op
        el.remove_class("is-active");
        assert_eq!(el.classes(), vec!["tab"]);
    }

    #[test]
    fn test_styles_and_attrs() {
        let el = Element::new("div");

        assert_eq!(el.style("margin-left"), None);
        el.set_style("margin-left", "25%");
        assert_eq!(el.style("margin-left"), Some("25%".to_string()));
        el.set_style("margin-left", "50%");
        assert_eq!(el.style("margin-left"), Some("50%".to_string()));

        el.set_attr("data-target", "#panel-1");
        assert_eq!(el.attr("data-target"), Some("#panel-1".to_string()));
    }

    #[test]
    fn test_identity_equality() {
        let a = Element::new("div");
        let b = a.clone();
        let c = Element::new("div");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
