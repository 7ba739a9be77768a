//! Prelude module for common imports.
//!
//! ```ignore
//! use chamsae_mfm::prelude::*;
//! ```

// Parsed tree
pub use crate::ast::{FnArg, FnArgs, MfmNode};

// Output tree
pub use crate::node::{Children, Element, Node, Text};

// Rendering
pub use crate::render::{render, render_function};

// Emoji
pub use crate::emoji::{
    mapper_fn, resolve_custom, resolve_unicode, CustomEmojiMapper, ResolvedEmoji,
    TWEMOJI_BASE_URL,
};

// Parser seam
pub use crate::parse::{parse_and_render, MfmParser};

// HTML serialization
pub use crate::html::{node_to_html, to_html};

// Attributes
pub use crate::attr::{Attrs, AttrsExt};

// Error
pub use crate::error::{MfmError, MfmResult};
