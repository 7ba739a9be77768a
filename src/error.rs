//! Error types for chamsae-mfm.
//!
//! Rendering itself is total and never fails; the only fallible seam is
//! the external parser behind the [`crate::parse::MfmParser`] trait.

use thiserror::Error;

/// Errors that can occur on the parse seam.
#[derive(Debug, Error)]
pub enum MfmError {
    /// The external markup parser rejected the input text.
    #[error("markup parse error: {0}")]
    Parse(String),
}

/// Result type alias for fallible operations.
pub type MfmResult<T> = Result<T, MfmError>;

impl MfmError {
    /// Create a parse error with a message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
