//! MFM node forest - the parsed markup tree
//!
//! `MfmNode` mirrors the node set an MFM parser produces: inline
//! containers (bold, italic, ...), leaf nodes carrying text (code,
//! mention, hashtag, ...), emoji nodes, and `$[name.args children]`
//! function nodes. The renderer consumes this tree read-only; nothing
//! here is mutated after parsing.
//!
//! Search and math nodes exist in the parser's grammar but have no
//! rendering rule; the renderer emits nothing for them.

// =============================================================================
// MfmNode
// =============================================================================

/// One node of a parsed MFM tree.
///
/// Container variants own their children in document order. The whole
/// tree is finite and acyclic by construction (it comes from parsing
/// text), so recursive traversal terminates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MfmNode {
    /// Literal text, possibly spanning multiple lines
    Text(String),
    /// `**bold**`
    Bold(Vec<MfmNode>),
    /// `*italic*` / `<i>...</i>`
    Italic(Vec<MfmNode>),
    /// `~~strikethrough~~`
    Strike(Vec<MfmNode>),
    /// `<center>...</center>`, block-level
    Center(Vec<MfmNode>),
    /// `<small>...</small>`
    Small(Vec<MfmNode>),
    /// `` `inline code` ``, content verbatim
    InlineCode(String),
    /// Fenced code block, content verbatim
    BlockCode {
        code: String,
        /// Language tag from the opening fence, if any
        lang: Option<String>,
    },
    /// `@username` or `@username@host`
    Mention {
        username: String,
        host: Option<String>,
    },
    /// `> quoted`, block-level
    Quote(Vec<MfmNode>),
    /// `#hashtag`
    Hashtag(String),
    /// Bare URL; the URL is both target and visible text
    Url(String),
    /// `[label](url)`; children form the visible content
    Link { url: String, children: Vec<MfmNode> },
    /// `<plain>...</plain>` - children pass through with no wrapper
    Plain(Vec<MfmNode>),
    /// A standard emoji glyph, e.g. `😀` (may be a multi-codepoint sequence)
    UnicodeEmoji(String),
    /// `:shortcode:` custom emoji
    EmojiCode(String),
    /// `$[name.key=value,flag children]` styling directive
    Fn {
        name: String,
        args: FnArgs,
        children: Vec<MfmNode>,
    },
    /// Search button node - parsed but not rendered
    Search { query: String, content: String },
    /// `\(...\)` inline math - parsed but not rendered
    MathInline(String),
    /// `\[...\]` block math - parsed but not rendered
    MathBlock(String),
}

impl MfmNode {
    /// Child nodes of a container variant, empty slice for leaves.
    pub fn children(&self) -> &[MfmNode] {
        match self {
            MfmNode::Bold(c)
            | MfmNode::Italic(c)
            | MfmNode::Strike(c)
            | MfmNode::Center(c)
            | MfmNode::Small(c)
            | MfmNode::Quote(c)
            | MfmNode::Plain(c) => c,
            MfmNode::Link { children, .. } | MfmNode::Fn { children, .. } => children,
            _ => &[],
        }
    }

    /// Whether this node renders as a block-level element.
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            MfmNode::Center(_) | MfmNode::Quote(_) | MfmNode::BlockCode { .. }
        )
    }

    /// Convenience constructor for a text node.
    pub fn text(content: impl Into<String>) -> Self {
        MfmNode::Text(content.into())
    }

    /// Convenience constructor for a mention without a host.
    pub fn mention(username: impl Into<String>) -> Self {
        MfmNode::Mention {
            username: username.into(),
            host: None,
        }
    }

    /// Convenience constructor for a mention with a host.
    pub fn mention_at(username: impl Into<String>, host: impl Into<String>) -> Self {
        MfmNode::Mention {
            username: username.into(),
            host: Some(host.into()),
        }
    }
}

// =============================================================================
// Function arguments
// =============================================================================

/// One argument of a function node: `key=value` or a bare `key` flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FnArg {
    /// Bare flag, e.g. the `h` in `$[flip.h ...]`
    Flag,
    /// Key with a string value, e.g. `x=2`
    Value(String),
}

/// Ordered argument list of a function node.
///
/// Ordered pairs instead of a map: argument counts are tiny and the
/// parser's source order is worth preserving for round-tripping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FnArgs(pub Vec<(String, FnArg)>);

impl FnArgs {
    /// Empty argument list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an argument by key.
    pub fn get(&self, key: &str) -> Option<&FnArg> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Look up a string-valued argument by key. Flags yield `None`.
    pub fn value(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(FnArg::Value(v)) => Some(v),
            _ => None,
        }
    }

    /// Builder-style insertion of a `key=value` argument.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.push((key.into(), FnArg::Value(value.into())));
        self
    }

    /// Builder-style insertion of a bare flag.
    pub fn with_flag(mut self, key: impl Into<String>) -> Self {
        self.0.push((key.into(), FnArg::Flag));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_accessor() {
        let node = MfmNode::Bold(vec![MfmNode::text("x")]);
        assert_eq!(node.children().len(), 1);

        let leaf = MfmNode::Hashtag("rust".into());
        assert!(leaf.children().is_empty());

        let link = MfmNode::Link {
            url: "https://example.com".into(),
            children: vec![MfmNode::text("here")],
        };
        assert_eq!(link.children().len(), 1);
    }

    #[test]
    fn test_block_classification() {
        assert!(MfmNode::Quote(vec![]).is_block());
        assert!(
            MfmNode::BlockCode {
                code: String::new(),
                lang: None
            }
            .is_block()
        );
        assert!(!MfmNode::Bold(vec![]).is_block());
        assert!(!MfmNode::text("x").is_block());
    }

    #[test]
    fn test_fn_args_lookup() {
        let args = FnArgs::new().with("x", "2").with_flag("h");

        assert_eq!(args.value("x"), Some("2"));
        assert_eq!(args.get("h"), Some(&FnArg::Flag));
        // Flags are not string values
        assert_eq!(args.value("h"), None);
        assert_eq!(args.get("missing"), None);
    }
}
