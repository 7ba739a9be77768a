//! Output tree types
//!
//! This module provides the `Element`, `Node`, and `Text` types that the
//! renderer produces. The tree is a plain HTML-shaped structure: elements
//! carry a tag, attributes, and children; text nodes carry content.
//!
//! Rendering a markup forest yields a flat [`Children`] sequence (the
//! forest has no single root), so `Children` is the renderer's output
//! type as well as the child collection inside every element.

mod element;
mod text;

pub use element::Element;
pub use text::Text;

use smallvec::SmallVec;

/// Node in an output tree - either Element or Text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Box<Element>),
    Text(Text),
}

impl Node {
    /// Check if this is an element node.
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Check if this is a text node.
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Get as element reference.
    #[inline]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get as text reference.
    #[inline]
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Node::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Text content of this node and its descendants, concatenated.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(t) => t.content.clone(),
            Node::Element(e) => e.text_content(),
        }
    }
}

impl From<Element> for Node {
    fn from(elem: Element) -> Self {
        Node::Element(Box::new(elem))
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

/// Type alias for children collection.
pub type Children = SmallVec<[Node; 8]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_kind_predicates() {
        let elem: Node = Element::new("span").into();
        let text: Node = Text::new("hello").into();

        assert!(elem.is_element());
        assert!(!elem.is_text());
        assert!(elem.as_element().is_some());
        assert!(elem.as_text().is_none());

        assert!(text.is_text());
        assert_eq!(text.as_text().unwrap().content, "hello");
    }

    #[test]
    fn test_node_text_content() {
        let node: Node = Element::new("span")
            .text("a")
            .child(Element::new("b").text("b"))
            .into();
        assert_eq!(node.text_content(), "ab");
    }
}
