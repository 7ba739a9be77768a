//! HTML serialization for output trees
//!
//! Renders output nodes to HTML strings. Text and attribute values are
//! escaped here, not at tree-construction time, so the tree always
//! holds the original content.

use crate::attr::Attrs;
use crate::node::{Element, Node};

/// Render a sequence of output nodes to an HTML string.
pub fn to_html(nodes: &[Node]) -> String {
    let mut output = String::new();
    for node in nodes {
        push_node(node, &mut output);
    }
    output
}

/// Render a single node to an HTML string.
pub fn node_to_html(node: &Node) -> String {
    let mut output = String::new();
    push_node(node, &mut output);
    output
}

fn push_node(node: &Node, output: &mut String) {
    match node {
        Node::Element(elem) => push_element(elem, output),
        Node::Text(text) => output.push_str(&escape_html(&text.content)),
    }
}

fn push_element(elem: &Element, output: &mut String) {
    output.push('<');
    output.push_str(&elem.tag);
    push_attrs(&elem.attrs, output);

    if is_void_element(&elem.tag) {
        output.push_str(" />");
        return;
    }

    output.push('>');
    for child in &elem.children {
        push_node(child, output);
    }
    output.push_str("</");
    output.push_str(&elem.tag);
    output.push('>');
}

fn push_attrs(attrs: &Attrs, output: &mut String) {
    for (name, value) in attrs.iter() {
        output.push(' ');
        output.push_str(name);
        output.push_str("=\"");
        output.push_str(&escape_attr(value));
        output.push('"');
    }
}

/// Escape HTML special characters in text content.
fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape attribute value special characters.
fn escape_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Check if element is a void element (self-closing).
fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

// =============================================================================
// Tests
// =============================================================================
