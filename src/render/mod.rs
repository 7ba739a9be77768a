//! Tree renderer - MFM node forest to output element tree
//!
//! One rendering rule per node kind, dispatched by exhaustive match.
//! Container kinds recurse into their children with the emoji mapper
//! forwarded unchanged. The renderer is a pure function of
//! `(nodes, mapper)`: no state survives a call, output order equals
//! input order, and no input can make it fail - kinds without a
//! rendering rule produce nothing.

mod function;

pub use function::render_function;

use crate::ast::MfmNode;
use crate::emoji::{self, CustomEmojiMapper, ResolvedEmoji};
use crate::node::{Children, Element, Node, Text};

/// Render a node forest to a sequence of output nodes.
///
/// The forest is consumed read-only; the mapper (when present) is
/// invoked once per custom emoji node, in document order.
pub fn render(nodes: &[MfmNode], mapper: Option<&dyn CustomEmojiMapper>) -> Children {
    let mut out = Children::new();
    for node in nodes {
        render_node(node, mapper, &mut out);
    }
    out
}

fn render_node(node: &MfmNode, mapper: Option<&dyn CustomEmojiMapper>, out: &mut Children) {
    match node {
        MfmNode::Text(text) => push_text_lines(text, out),

        // Styled inline containers
        MfmNode::Bold(children) => out.push(wrap("span", "mfm-bold", children, mapper)),
        MfmNode::Italic(children) => out.push(wrap("span", "mfm-italic", children, mapper)),
        MfmNode::Strike(children) => out.push(wrap("span", "mfm-strike", children, mapper)),
        MfmNode::Small(children) => out.push(wrap("span", "mfm-small", children, mapper)),

        // Block-level containers
        MfmNode::Center(children) => out.push(wrap("div", "mfm-center", children, mapper)),
        MfmNode::Quote(children) => out.push(wrap("blockquote", "mfm-quote", children, mapper)),

        // Code is emitted verbatim, never re-parsed as markup
        MfmNode::InlineCode(code) => out.push(
            Element::new("code")
                .with_class("mfm-code-inline")
                .text(code)
                .into(),
        ),
        MfmNode::BlockCode { code, lang } => {
            let mut pre = Element::new("pre").with_class("mfm-code-block");
            if let Some(lang) = lang {
                pre = pre.attr("data-lang", lang);
            }
            out.push(pre.text(code).into());
        }

        MfmNode::Mention { username, host } => {
            let mut label = format!("@{username}");
            if let Some(host) = host {
                label.push('@');
                label.push_str(host);
            }
            out.push(
                Element::new("span")
                    .with_class("mfm-mention")
                    .text(label)
                    .into(),
            );
        }
        MfmNode::Hashtag(tag) => out.push(
            Element::new("span")
                .with_class("mfm-hashtag")
                .text(format!("#{tag}"))
                .into(),
        ),

        // Bare URL: the URL is both target and visible text
        MfmNode::Url(url) => out.push(
            Element::new("a")
                .with_class("mfm-link")
                .attr("href", url.as_str())
                .text(url.as_str())
                .into(),
        ),
        // Labelled link: children form the visible content
        MfmNode::Link { url, children } => out.push(
            Element::new("a")
                .with_class("mfm-link")
                .attr("href", url.as_str())
                .extend(render(children, mapper))
                .into(),
        ),

        // Transparent passthrough: children splat with no wrapper
        MfmNode::Plain(children) => out.extend(render(children, mapper)),

        MfmNode::UnicodeEmoji(glyph) => {
            out.push(emoji_element(emoji::resolve_unicode(glyph)).into());
        }
        MfmNode::EmojiCode(code) => {
            out.push(emoji_element(emoji::resolve_custom(code, mapper)).into());
        }

        MfmNode::Fn {
            name,
            args,
            children,
        } => out.extend(render_function(name, args, children, mapper)),

        // No rendering rule: emit nothing, never fail
        MfmNode::Search { .. } | MfmNode::MathInline(_) | MfmNode::MathBlock(_) => {}
    }
}

/// Split text on line breaks (`\r\n` or `\n`) and emit each line as a
/// literal text node with `<br>` markers between consecutive lines.
fn push_text_lines(text: &str, out: &mut Children) {
    for (idx, line) in text.split('\n').enumerate() {
        if idx > 0 {
            out.push(Element::new("br").into());
        }
        let line = line.strip_suffix('\r').unwrap_or(line);
        out.push(Text::new(line).into());
    }
}

fn wrap(
    tag: &'static str,
    class: &'static str,
    children: &[MfmNode],
    mapper: Option<&dyn CustomEmojiMapper>,
) -> Node {
    Element::new(tag)
        .with_class(class)
        .extend(render(children, mapper))
        .into()
}

/// Build the `<img>` for a resolved emoji. An unresolved emoji keeps
/// its alt text and simply has no `src`.
fn emoji_element(resolved: ResolvedEmoji) -> Element {
    let mut img = Element::new("img").with_class("mfm-emoji");
    if let Some(src) = resolved.src {
        img = img.attr("src", src);
    }
    img.attr("alt", resolved.alt)
        .attr("loading", "lazy")
        .attr("decoding", "async")
}

// =============================================================================
// Tests
// =============================================================================
