//! Tabline Document Model
//!
//! A headless element tree for widget state. Nodes carry a tag, an optional
//! id, a set of style tokens (classes), an inline style map, and attributes.
//! Handles are cheap to clone and compare by node identity, so a widget can
//! hold the same node the tree does and both observe every mutation.

mod element;
mod tree;

pub use element::Element;
