//! Element type - HTML elements with attributes and children
//!
//! The core building block of the output tree.

use compact_str::CompactString;
use smallvec::SmallVec;

use crate::attr::{Attrs, AttrsExt};

use super::{Node, Text};

// =============================================================================
// Element
// =============================================================================

/// HTML element with attributes and child nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// HTML tag name
    pub tag: CompactString,
    /// Element attributes
    pub attrs: Attrs,
    /// Child nodes
    pub children: SmallVec<[Node; 8]>,
}

impl Element {
    /// Create an empty element with the given tag
    pub fn new(tag: impl Into<CompactString>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: SmallVec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builder API
    // ─────────────────────────────────────────────────────────────────────────

    /// Set an attribute (builder style)
    pub fn attr(mut self, name: impl Into<CompactString>, value: impl Into<String>) -> Self {
        self.attrs.set_attr(name, value);
        self
    }

    /// Set the `class` attribute (builder style)
    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Append a child element (builder style)
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a text child (builder style)
    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.children.push(Node::Text(Text::new(content)));
        self
    }

    /// Append a whole sequence of children (builder style)
    pub fn extend(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Attribute access
    // ─────────────────────────────────────────────────────────────────────────

    /// Get attribute value by name
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get_attr(name)
    }

    /// Set attribute value (update if exists, add if not)
    pub fn set_attr(&mut self, name: impl Into<CompactString>, value: impl Into<String>) {
        self.attrs.set_attr(name, value);
    }

    /// Check if attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.has_attr(name)
    }

    /// Get the `class` attribute
    pub fn class(&self) -> Option<&str> {
        self.get_attr("class")
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Other helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Check if element has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of direct children (all node types)
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Iterate over child element references
    pub fn children_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| n.as_element())
    }

    /// Get text content of this element (concatenated from all text nodes)
    pub fn text_content(&self) -> String {
        let mut result = String::new();
        self.collect_text(&mut result);
        result
    }

    fn collect_text(&self, buf: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => buf.push_str(&t.content),
                Node::Element(e) => e.collect_text(buf),
            }
        }
    }
}
