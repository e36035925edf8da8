// grounded on `ancvm_binary::BinaryError` (crates/binary/src/lib.rs): a
// hand-rolled `Display` + `std::error::Error` impl, no `thiserror`.

use std::fmt::{self, Display};

/// The taxonomy of things that can go wrong decoding or encoding a wire
/// value (spec.md §7). Every kind is reachable from at least one public
/// operation; none of them are recovered locally by this crate.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CodecErrorKind {
    /// A decoder was read from before `set_block` bound it to a byte view.
    Unbound,
    /// A numeric argument fell outside the range the wire format allows.
    OutOfRange,
    /// A read would have advanced the cursor past the end of the window.
    PastEnd,
    /// The byte stream does not parse as valid wire format: an
    /// unterminated varint, a desynchronized UTF-8 sequence, a negative or
    /// over-long length prefix, or an unrecognized `ByteSource`.
    InvalidEncoding,
    /// A decimal-string parse rejected a non-digit character.
    ParseFailure,
    /// An integer division by zero was attempted.
    DivideByZero,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CodecError {
    pub kind: CodecErrorKind,
    message: String,
}

impl CodecError {
    pub fn new(kind: CodecErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn unbound() -> Self {
        Self::new(CodecErrorKind::Unbound, "decoder has no bound byte block")
    }

    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(CodecErrorKind::OutOfRange, message)
    }

    pub fn past_end() -> Self {
        Self::new(CodecErrorKind::PastEnd, "read past end of decoder window")
    }

    pub fn invalid_encoding(message: impl Into<String>) -> Self {
        Self::new(CodecErrorKind::InvalidEncoding, message)
    }

    pub fn parse_failure(message: impl Into<String>) -> Self {
        Self::new(CodecErrorKind::ParseFailure, message)
    }
}

impl Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "codec error ({:?}): {}", self.kind, self.message)
    }
}

impl std::error::Error for CodecError {}

pub type CodecResult<T> = Result<T, CodecError>;
