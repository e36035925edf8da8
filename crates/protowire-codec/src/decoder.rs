//! Cursor-based reader over a bound byte view (spec.md §4.3, §5).
//!
//! Mirrors `ancvm_binary::BytecodeReader`'s cursor-over-a-slice shape, with
//! the two behaviors spec.md §5 calls out explicitly: a decoder created
//! with `Decoder::new` is `Unbound` until `set_block` gives it something to
//! read, and once any read fails the decoder latches into `Error` and every
//! later read returns that same error without touching the cursor again.

use crate::byte_source::{ByteSource, CoercedBytes};
use crate::error::{CodecError, CodecErrorKind, CodecResult};
use crate::int64::{self, Hash64, Split64};
use protowire_types::limits::{MAX_VARINT32_BYTES, MAX_VARINT64_BYTES};

/// The three states spec.md §5 names: a decoder that has never been bound
/// to bytes, one that is bound and has not yet hit an error, and one that
/// has latched an error and will not advance further.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderState {
    Unbound,
    Ready,
    Error,
}

/// A cursor over a bound byte view. Not `Sync`: spec.md §5 contracts this
/// type to single-threaded use, and the borrowed `CoercedBytes<'a>` plus
/// plain `usize` cursor fields make that the only sound way to use it
/// anyway (no internal synchronization is provided).
///
/// Derives `Clone` rather than hand-writing a `clone()` method (spec.md
/// §4.3): cloning duplicates `start`/`end`/`cursor`/`error` and makes an
/// independent copy of the bound window (a cheap pointer-and-length copy
/// for `CoercedBytes::Borrowed`, a full `Vec` clone for `Owned`), so the two
/// decoders afterwards advance independently.
#[derive(Clone)]
pub struct Decoder<'a> {
    block: Option<CoercedBytes<'a>>,
    start: usize,
    end: usize,
    cursor: usize,
    error: Option<CodecErrorKind>,
}

impl<'a> Decoder<'a> {
    pub fn new() -> Self {
        Self {
            block: None,
            start: 0,
            end: 0,
            cursor: 0,
            error: None,
        }
    }

    /// Binds the decoder to a fresh byte view, discarding whatever it was
    /// previously bound to. Coercion happens exactly once, here.
    pub fn set_block(&mut self, source: impl Into<ByteSource<'a>>) -> CodecResult<()> {
        let coerced = source.into().coerce()?;
        self.end = coerced.as_slice().len();
        self.block = Some(coerced);
        self.start = 0;
        self.cursor = 0;
        self.error = None;
        Ok(())
    }

    /// Rewinds the cursor to the start of the bound window and clears the
    /// error latch, without touching what the decoder is bound to.
    pub fn reset(&mut self) {
        self.cursor = self.start;
        self.error = None;
    }

    /// Drops whatever this decoder was bound to and returns it to
    /// `Unbound`, releasing any borrowed or owned bytes it was holding.
    /// Used by `DecoderPool::free` so a pooled decoder is genuinely
    /// `Unbound`, not `Ready` over a leftover empty slice.
    pub fn unbind(&mut self) {
        self.block = None;
        self.start = 0;
        self.end = 0;
        self.cursor = 0;
        self.error = None;
    }

    /// Advances the cursor by `n` bytes without reading anything (spec.md
    /// §4.3: "adds to `cursor` and asserts `cursor ≤ end`"). Latches
    /// `PastEnd` instead of panicking if that would move the cursor beyond
    /// the bound window.
    pub fn advance(&mut self, n: usize) -> CodecResult<()> {
        if let Some(kind) = self.error {
            return Err(CodecError::new(kind, "decoder already in error state"));
        }
        if self.block.is_none() {
            return Err(self.latch(CodecError::unbound()));
        }
        if self.cursor + n > self.end {
            return Err(self.latch(CodecError::past_end()));
        }
        self.cursor += n;
        Ok(())
    }

    pub fn state(&self) -> DecoderState {
        if self.error.is_some() {
            DecoderState::Error
        } else if self.block.is_none() {
            DecoderState::Unbound
        } else {
            DecoderState::Ready
        }
    }

    pub fn get_error(&self) -> Option<CodecErrorKind> {
        self.error
    }

    pub fn at_end(&self) -> bool {
        self.cursor >= self.end
    }

    pub fn past_end(&self) -> bool {
        self.cursor > self.end
    }

    pub fn position(&self) -> usize {
        self.cursor - self.start
    }

    pub fn remaining(&self) -> usize {
        self.end.saturating_sub(self.cursor)
    }

    /// The whole bound window, unaffected by cursor position. `Unbound` if
    /// nothing has been bound yet.
    pub fn get_buffer(&self) -> CodecResult<&[u8]> {
        match &self.block {
            Some(block) => Ok(&block.as_slice()[self.start..self.end]),
            None => Err(CodecError::unbound()),
        }
    }

    fn latch(&mut self, err: CodecError) -> CodecError {
        self.error = Some(err.kind);
        err
    }

    /// Every read funnels through here first: an already-latched error is
    /// returned again unchanged, an unbound decoder is an error, and
    /// otherwise the caller gets a validated byte slice of exactly `len`
    /// bytes with the cursor already advanced past it.
    fn take(&mut self, len: usize) -> CodecResult<&[u8]> {
        if let Some(kind) = self.error {
            return Err(CodecError::new(kind, "decoder already in error state"));
        }
        let Some(block) = &self.block else {
            return Err(self.latch(CodecError::unbound()));
        };
        if self.cursor + len > self.end {
            return Err(self.latch(CodecError::past_end()));
        }
        let slice = &block.as_slice()[self.cursor..self.cursor + len];
        self.cursor += len;
        Ok(slice)
    }

    // ---- fixed-width integers -------------------------------------------------

    pub fn read_uint8(&mut self) -> CodecResult<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_uint16(&mut self) -> CodecResult<u16> {
        Ok(u16::from_le_bytes(self.take(2)?.try_into().unwrap()))
    }

    pub fn read_uint32(&mut self) -> CodecResult<u32> {
        Ok(u32::from_le_bytes(self.take(4)?.try_into().unwrap()))
    }

    pub fn read_int8(&mut self) -> CodecResult<i8> {
        Ok(self.take(1)?[0] as i8)
    }

    pub fn read_int16(&mut self) -> CodecResult<i16> {
        Ok(i16::from_le_bytes(self.take(2)?.try_into().unwrap()))
    }

    pub fn read_int32(&mut self) -> CodecResult<i32> {
        Ok(i32::from_le_bytes(self.take(4)?.try_into().unwrap()))
    }

    // ---- varints ----------------------------------------------------------

    /// Up to 10 bytes. The 5th byte's top nibble is masked off and ignored;
    /// if that byte's continuation bit is still set (a sign-extended
    /// negative `int32`), up to 5 more bytes are consumed and discarded
    /// looking for the terminator. See `read_unsigned_varint32_strict` for
    /// the variant that instead rejects garbage in the 5th byte's nibble.
    pub fn read_unsigned_varint32(&mut self) -> CodecResult<u32> {
        self.read_varint32(false)
    }

    /// As `read_unsigned_varint32`, but rejects a 5th byte whose top nibble
    /// is nonzero instead of silently discarding it (spec.md §9, the
    /// opt-in strict mode this crate adds to resolve that open question).
    pub fn read_unsigned_varint32_strict(&mut self) -> CodecResult<u32> {
        self.read_varint32(true)
    }

    /// spec.md §4.3's "fast path": the first four bytes contribute their low
    /// 7 bits each; the fifth is masked with `0x0f` (its top nibble exists
    /// only to sign-extend a 64-bit varint, so a plain 32-bit reader
    /// discards it). A negative `int32` written by `write_signed_varint32`
    /// is sign-extended to the full 10-byte varint64 shape, so the 5th
    /// byte's continuation bit being set is *not* malformed input here —
    /// it means the value overflows 32 bits and the remaining bytes carry
    /// only sign-extension padding to be consumed and discarded. Only a
    /// stream with no terminator within the full 10-byte varint budget is
    /// `InvalidEncoding`.
    fn read_varint32(&mut self, strict: bool) -> CodecResult<u32> {
        let mut value: u32 = 0;
        for i in 0..MAX_VARINT32_BYTES - 1 {
            let byte = self.read_uint8()?;
            value |= ((byte & 0x7f) as u32) << (7 * i);
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        let byte = self.read_uint8()?;
        if strict && byte & 0xf0 != 0 {
            return Err(self.latch(CodecError::invalid_encoding(
                "5th varint32 byte carries bits beyond the 32-bit value",
            )));
        }
        value |= ((byte & 0x0f) as u32) << (7 * (MAX_VARINT32_BYTES - 1));
        if byte & 0x80 == 0 {
            return Ok(value);
        }
        for _ in 0..MAX_VARINT64_BYTES - MAX_VARINT32_BYTES {
            let byte = self.read_uint8()?;
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(self.latch(CodecError::invalid_encoding("varint32 longer than 10 bytes")))
    }

    /// Sign-extended low 32 bits of a generic varint (spec.md §4.2: negative
    /// `write_signed_varint32` values always cost the full 10-byte form, so
    /// reading it back must parse that full width too).
    pub fn read_signed_varint32(&mut self) -> CodecResult<i32> {
        Ok(self.read_split_varint64()?.to_i64() as i32)
    }

    pub fn read_unsigned_varint64(&mut self) -> CodecResult<u64> {
        Ok(self.read_split_varint64()?.to_u64())
    }

    pub fn read_signed_varint64(&mut self) -> CodecResult<i64> {
        Ok(self.read_split_varint64()?.to_i64())
    }

    /// Up to 10 bytes; an 11th continuation byte is `InvalidEncoding`
    /// (spec.md §8 scenario 6: 11 bytes of `0xff` then `0x00`).
    pub fn read_split_varint64(&mut self) -> CodecResult<Split64> {
        let mut value: u64 = 0;
        for i in 0..MAX_VARINT64_BYTES {
            let byte = self.read_uint8()?;
            value |= ((byte & 0x7f) as u64) << (7 * i);
            if byte & 0x80 == 0 {
                return Ok(Split64::from_u64(value));
            }
        }
        Err(self.latch(CodecError::invalid_encoding("varint64 longer than 10 bytes")))
    }

    pub fn read_zigzag_varint32(&mut self) -> CodecResult<i32> {
        Ok(int64::from_zigzag32(self.read_unsigned_varint32()?))
    }

    pub fn read_zigzag_varint64(&mut self) -> CodecResult<i64> {
        Ok(int64::from_zigzag64(self.read_split_varint64()?.to_u64()))
    }

    pub fn read_zigzag_varint_hash64(&mut self) -> CodecResult<Hash64> {
        Ok(Hash64::from_i64(int64::from_zigzag64(self.read_split_varint64()?.to_u64())))
    }

    pub fn read_zigzag_varint64_string(&mut self) -> CodecResult<String> {
        Ok(self.read_zigzag_varint_hash64()?.to_signed_decimal_string())
    }

    pub fn read_varint_hash64(&mut self) -> CodecResult<Hash64> {
        Ok(Hash64::from_split64(self.read_split_varint64()?))
    }

    // ---- fixed64 ------------------------------------------------------------

    pub fn read_fixed_hash64(&mut self) -> CodecResult<Hash64> {
        let lo = self.read_uint32()?;
        let hi = self.read_uint32()?;
        Ok(Hash64::from_split64(Split64::new(lo, hi)))
    }

    pub fn read_int64(&mut self) -> CodecResult<i64> {
        Ok(self.read_fixed_hash64()?.to_i64())
    }

    pub fn read_uint64(&mut self) -> CodecResult<u64> {
        Ok(self.read_fixed_hash64()?.to_u64())
    }

    pub fn read_int64_string(&mut self) -> CodecResult<String> {
        Ok(self.read_fixed_hash64()?.to_signed_decimal_string())
    }

    // ---- floating point -------------------------------------------------------

    pub fn read_float(&mut self) -> CodecResult<f32> {
        Ok(f32::from_le_bytes(self.take(4)?.try_into().unwrap()))
    }

    pub fn read_double(&mut self) -> CodecResult<f64> {
        Ok(f64::from_le_bytes(self.take(8)?.try_into().unwrap()))
    }

    // ---- misc scalars -----------------------------------------------------

    pub fn read_bool(&mut self) -> CodecResult<bool> {
        Ok(self.read_uint8()? != 0)
    }

    pub fn read_enum(&mut self) -> CodecResult<i32> {
        self.read_signed_varint32()
    }

    pub fn read_bytes(&mut self, len: usize) -> CodecResult<Vec<u8>> {
        Ok(self.take(len)?.to_vec())
    }

    /// `&str` is already a UTF-8 validity proof; Rust's `str::from_utf8`
    /// performs the exact byte-range dispatch spec.md §4.3 describes by
    /// hand (ASCII / two-byte / three-byte / four-byte leading bytes),
    /// rejecting desynchronized sequences as `InvalidEncoding`.
    pub fn read_string(&mut self, len: usize) -> CodecResult<String> {
        let bytes = self.take(len)?;
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|err| CodecError::invalid_encoding(format!("invalid UTF-8 in string: {err}")))
    }
}

impl<'a> Default for Decoder<'a> {
    fn default() -> Self {
        Self::new()
    }
}
