//! Emoji resolution
//!
//! Two kinds of emoji appear in markup: custom short-codes (`:plachta:`)
//! that resolve through a caller-supplied mapper, and standard Unicode
//! glyphs that resolve to Twemoji CDN assets keyed by a codepoint
//! identifier.
//!
//! Both resolvers are total: a missing mapping degrades to an alt-text
//! placeholder, never an error.

use std::borrow::Cow;

use compact_str::{CompactString, ToCompactString};
use rustc_hash::FxHashMap;

/// Twemoji asset base. The codepoint identifier is the path segment.
pub const TWEMOJI_BASE_URL: &str =
    "https://cdn.jsdelivr.net/gh/twitter/twemoji@14.0.2/assets/svg";

const ZERO_WIDTH_JOINER: char = '\u{200d}';
const VARIATION_SELECTOR_16: char = '\u{fe0f}';

// =============================================================================
// CustomEmojiMapper
// =============================================================================

/// Caller-supplied lookup from custom emoji short-code to image URL.
///
/// Invoked synchronously, once per emoji-code node, in document order.
/// The renderer holds no cache around it.
pub trait CustomEmojiMapper {
    /// Resolve a short-code (without the surrounding colons) to an
    /// image URL, or `None` if no mapping exists.
    fn resolve(&self, code: &str) -> Option<String>;
}

/// Map-backed mapper: the common shape when emoji come from an instance
/// metadata table.
impl CustomEmojiMapper for FxHashMap<String, String> {
    fn resolve(&self, code: &str) -> Option<String> {
        self.get(code).cloned()
    }
}

/// Adapter turning a plain closure into a [`CustomEmojiMapper`].
pub fn mapper_fn<F>(f: F) -> MapperFn<F>
where
    F: Fn(&str) -> Option<String>,
{
    MapperFn(f)
}

/// See [`mapper_fn`].
pub struct MapperFn<F>(F);

impl<F> CustomEmojiMapper for MapperFn<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn resolve(&self, code: &str) -> Option<String> {
        (self.0)(code)
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Result of resolving an emoji node to displayable form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEmoji {
    /// Stable identifier: the short-code for custom emoji, the
    /// codepoint identifier (or raw glyph fallback) for Unicode emoji.
    pub id: CompactString,
    /// Image source URL, absent when no mapping/derivation exists.
    pub src: Option<String>,
    /// Alt text: `:code:` for custom emoji, the raw glyph otherwise.
    pub alt: String,
}

/// Resolve a custom emoji short-code through the caller's mapper.
///
/// The alt text is always `:code:`, resolved or not, so an unresolved
/// emoji still renders as a readable placeholder.
pub fn resolve_custom(code: &str, mapper: Option<&dyn CustomEmojiMapper>) -> ResolvedEmoji {
    ResolvedEmoji {
        id: code.to_compact_string(),
        src: mapper.and_then(|m| m.resolve(code)),
        alt: format!(":{code}:"),
    }
}

/// Resolve a Unicode emoji glyph to its Twemoji asset.
///
/// A glyph whose identifier cannot be derived (nothing left after
/// stripping variation selectors) degrades to the raw glyph with no
/// image source.
pub fn resolve_unicode(glyph: &str) -> ResolvedEmoji {
    match codepoint_id(glyph) {
        Some(id) => {
            let src = format!("{TWEMOJI_BASE_URL}/{id}.svg");
            ResolvedEmoji {
                id,
                src: Some(src),
                alt: glyph.to_owned(),
            }
        }
        None => ResolvedEmoji {
            id: glyph.to_compact_string(),
            src: None,
            alt: glyph.to_owned(),
        },
    }
}

/// Derive the Twemoji codepoint identifier for a glyph.
///
/// Matches Twemoji's asset naming: lowercase hex codepoints joined with
/// `-`. Sequences containing a zero-width joiner keep their variation
/// selectors; plain glyphs have U+FE0F stripped first so that the text
/// and emoji presentation forms share one identifier.
pub fn codepoint_id(glyph: &str) -> Option<CompactString> {
    let effective: Cow<'_, str> = if glyph.contains(ZERO_WIDTH_JOINER) {
        Cow::Borrowed(glyph)
    } else {
        Cow::Owned(glyph.replace(VARIATION_SELECTOR_16, ""))
    };

    if effective.is_empty() {
        return None;
    }

    let mut id = CompactString::default();
    for (idx, ch) in effective.chars().enumerate() {
        if idx > 0 {
            id.push('-');
        }
        id.push_str(&format!("{:x}", ch as u32));
    }
    Some(id)
}

// =============================================================================
// Tests
// =============================================================================
