//! Error types for the Ge'ez numeral crate.

use thiserror::Error;

/// The error type for every fallible operation in this crate.
///
/// The lenient [`decode`](crate::decode) never produces one; encoding only
/// ever fails with [`GeezError::InvalidInput`].
#[derive(Debug, Error)]
pub enum GeezError {
    /// The value handed to `encode` is negative, fractional, not a number,
    /// or outside the `u64` range.
    #[error("invalid input {input:?}: {reason}")]
    InvalidInput { input: String, reason: &'static str },

    /// Strict decoding met a character outside the numeral alphabet.
    #[error("unknown glyph {glyph:?} at position {position}")]
    UnknownGlyph { glyph: char, position: usize },

    /// Strict decoding produced a value that does not fit in a `u64`.
    #[error("numeral exceeds the u64 range")]
    Overflow,

    /// Strict decoding was given an empty string.
    #[error("empty numeral")]
    Empty,

    /// The numeral is readable but is not the form the encoder writes.
    #[error("non-canonical numeral, canonical form is {canonical:?}")]
    NonCanonical { canonical: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("history serialization failed: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GeezError {
    pub(crate) fn invalid_input(input: impl ToString, reason: &'static str) -> Self {
        Self::InvalidInput {
            input: input.to_string(),
            reason,
        }
    }
}

/// A convenience `Result` type alias using the crate's `GeezError` type.
pub type Result<T> = std::result::Result<T, GeezError>;
