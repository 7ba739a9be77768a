//! Parser adapter
//!
//! The markup grammar lives in an external parser; this crate only
//! consumes its node forest. The parser is injected as a capability so
//! the renderer can be unit-tested against hand-constructed forests and
//! callers can swap grammars (full MFM vs. the simple subset) without
//! touching rendering.

use crate::ast::MfmNode;
use crate::emoji::CustomEmojiMapper;
use crate::error::MfmResult;
use crate::node::Children;
use crate::render::render;

/// An external markup parser producing an [`MfmNode`] forest.
pub trait MfmParser {
    /// Parse source text into a node forest.
    fn parse(&self, text: &str) -> MfmResult<Vec<MfmNode>>;
}

impl<P: MfmParser + ?Sized> MfmParser for &P {
    fn parse(&self, text: &str) -> MfmResult<Vec<MfmNode>> {
        (**self).parse(text)
    }
}

/// Parse source text and render the resulting forest in one step.
///
/// Rendering cannot fail; any error comes from the parser.
pub fn parse_and_render(
    parser: impl MfmParser,
    text: &str,
    mapper: Option<&dyn CustomEmojiMapper>,
) -> MfmResult<Children> {
    let nodes = parser.parse(text)?;
    Ok(render(&nodes, mapper))
}
