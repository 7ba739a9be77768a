//! chamsae-mfm - MFM markup renderer
//!
//! Renders an MFM (Misskey-flavored markup) node forest into a typed
//! HTML element tree, with custom and Unicode emoji resolution.
//!
//! ## Pipeline
//!
//! ```text
//! text ──▶ [external parser] ──▶ Vec<MfmNode> ──▶ render() ──▶ Children ──▶ to_html()
//! ```
//!
//! The parser is an injected seam ([`parse::MfmParser`]); this crate
//! owns everything to the right of it. Rendering is a pure synchronous
//! function and never fails - unknown node kinds and unresolvable emoji
//! degrade to empty or placeholder output instead of erroring.
//!
//! ## Modules
//! - `ast`: parsed node forest (`MfmNode`, function arguments)
//! - `node`: output tree (`Element`, `Text`, `Node`, `Children`)
//! - `render`: tree renderer and function-node handler
//! - `emoji`: custom/Unicode emoji resolution
//! - `parse`: parser adapter trait
//! - `html`: HTML string serialization
//! - `attr`: attribute system
//!
//! ## Usage
//!
//! ```
//! use chamsae_mfm::ast::MfmNode;
//! use chamsae_mfm::emoji::mapper_fn;
//! use chamsae_mfm::{html, render};
//!
//! let nodes = vec![
//!     MfmNode::Bold(vec![MfmNode::text("hello")]),
//!     MfmNode::EmojiCode("wave".into()),
//! ];
//! let mapper = mapper_fn(|code| {
//!     (code == "wave").then(|| "https://example.com/wave.png".into())
//! });
//!
//! let tree = render::render(&nodes, Some(&mapper));
//! let html = html::to_html(&tree);
//! assert!(html.starts_with(r#"<span class="mfm-bold">hello</span>"#));
//! ```

/// Parsed node forest types
pub mod ast;

/// Attribute types
pub mod attr;

/// Emoji resolution
pub mod emoji;

/// Error types
pub mod error;

/// HTML serialization
pub mod html;

/// Output tree types: Element, Node, Text
pub mod node;

/// Parser adapter seam
pub mod parse;

/// Prelude for common imports
pub mod prelude;

/// Tree renderer
pub mod render;

// =============================================================================
// Re-exports
// =============================================================================

pub use ast::{FnArg, FnArgs, MfmNode};
pub use emoji::{CustomEmojiMapper, ResolvedEmoji};
pub use error::{MfmError, MfmResult};
pub use node::{Children, Element, Node, Text};
pub use parse::MfmParser;
pub use render::render;

// =============================================================================
// Tests
// =============================================================================
