//! Polymorphic input accepted by the decoder (spec.md §3 "ByteSource",
//! §4.4). Coerced exactly once, on `Decoder::set_block`, into a canonical
//! borrowed-or-owned byte view; nothing downstream of that point touches
//! `ByteSource` again.

use base64::Engine;

use crate::error::CodecError;

/// A value the decoder can be bound to. `Owned`/`Base64` variants exist
/// because a caller may not have a `'static` or otherwise-outliving slice
/// on hand — spec.md §4.4's "owned byte vector" and "base64-encoded text"
/// variants.
pub enum ByteSource<'a> {
    Slice(&'a [u8]),
    Owned(Vec<u8>),
    Base64(&'a str),
}

impl<'a> ByteSource<'a> {
    /// Coerces this source into a canonical byte view. `Slice` is returned
    /// unchanged (no copy); `Owned` is returned as-is; `Base64` is decoded
    /// into a freshly owned vector. Invalid base64 text is
    /// `CodecErrorKind::InvalidEncoding`, never a panic.
    pub fn coerce(self) -> Result<CoercedBytes<'a>, CodecError> {
        match self {
            ByteSource::Slice(slice) => Ok(CoercedBytes::Borrowed(slice)),
            ByteSource::Owned(vec) => Ok(CoercedBytes::Owned(vec)),
            ByteSource::Base64(text) => base64::engine::general_purpose::STANDARD
                .decode(text)
                .map(CoercedBytes::Owned)
                .map_err(|err| CodecError::invalid_encoding(format!("invalid base64 input: {err}"))),
        }
    }
}

impl<'a> From<&'a [u8]> for ByteSource<'a> {
    fn from(slice: &'a [u8]) -> Self {
        ByteSource::Slice(slice)
    }
}

impl From<Vec<u8>> for ByteSource<'static> {
    fn from(vec: Vec<u8>) -> Self {
        ByteSource::Owned(vec)
    }
}

/// The canonical byte view a decoder binds to after coercion. Either
/// borrows the caller's slice, or owns bytes this crate produced itself
/// (from decoding base64, or from a caller who handed over a `Vec<u8>`).
#[derive(Clone)]
pub enum CoercedBytes<'a> {
    Borrowed(&'a [u8]),
    Owned(Vec<u8>),
}

impl<'a> CoercedBytes<'a> {
    pub fn as_slice(&self) -> &[u8] {
        match self {
            CoercedBytes::Borrowed(slice) => slice,
            CoercedBytes::Owned(vec) => vec.as_slice(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn slice_source_coerces_without_copying() {
        let data = [1u8, 2, 3];
        let coerced = ByteSource::Slice(&data).coerce().unwrap();
        assert_eq!(coerced.as_slice(), &data);
    }

    #[test]
    fn owned_source_coerces_by_move() {
        let coerced = ByteSource::Owned(vec![9, 8, 7]).coerce().unwrap();
        assert_eq!(coerced.as_slice(), &[9, 8, 7]);
    }

    #[test]
    fn base64_source_decodes_to_owned_bytes() {
        let coerced = ByteSource::Base64("AQIDBA==").coerce().unwrap();
        assert_eq!(coerced.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn invalid_base64_is_invalid_encoding_not_a_panic() {
        let err = ByteSource::Base64("not valid base64!!").coerce().unwrap_err();
        assert_eq!(err.kind, crate::error::CodecErrorKind::InvalidEncoding);
    }
}
