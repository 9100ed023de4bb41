/// Error types for frame parsing.
///
/// Parsers fail internally with [`DecodeError`]; the base contract in
/// `parser` turns every such failure into a single public [`MalformedFrame`].
use core::fmt::Write;

use thiserror::Error;

use crate::field::OutOfBounds;
use crate::record::Label;

/// Why a subtype decoder rejected a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A required field lies outside the buffer
    #[error("Payload out of bounds")]
    OutOfBounds(#[from] OutOfBounds),

    /// A field with a closed code space carries a value outside it.
    /// `code` is the wire value read as a signed 16-bit integer.
    #[error("Invalid {field} with code [{code}]")]
    InvalidCode { field: &'static str, code: i16 },
}

/// A captured frame that cannot be decoded safely.
///
/// The frame is dropped; the parser's malformed counter has already moved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{parser}: {reason}")]
pub struct MalformedFrame {
    parser: &'static str,
    reason: Label,
}

impl MalformedFrame {
    pub fn new(parser: &'static str, cause: &DecodeError) -> Self {
        let mut reason = Label::new();
        let _ = write!(reason, "{cause}");
        Self { parser, reason }
    }

    /// Name of the parser that rejected the frame
    pub fn parser(&self) -> &'static str {
        self.parser
    }

    /// Human-readable reason, e.g. "Invalid algorithm type with code [2]"
    pub fn reason(&self) -> &str {
        self.reason.as_str()
    }
}
