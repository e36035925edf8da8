//! Append-only byte buffer that serializes scalars to Protocol Buffers
//! wire format (spec.md §4.2).
//!
//! Every fixed-width `write_*` below takes the exact native integer type
//! the wire value occupies (`u8`, `i16`, `u32`, ...). spec.md §4.2 has the
//! encoder assert that a weakly-typed argument is "an exact integer within
//! the declared range" at runtime; in Rust the type itself is that
//! assertion, so there is nothing left to check at these call sites — a
//! strict improvement on the source, not a missing feature (see
//! `SPEC_FULL.md` §4.2).

use crate::error::{CodecError, CodecResult};
use crate::int64::{self, Hash64, Split64};

/// An append-only sequence of bytes. Mirrors `ancvm_image::BytecodeWriter`
/// (`buffer: Vec<u8>`, no cursor) generalized from fixed instruction shapes
/// to the full protobuf scalar surface.
#[derive(Debug, Default)]
pub struct Encoder {
    buffer: Vec<u8>,
}

impl Encoder {
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Consumes the encoder and hands the accumulated bytes to the caller
    /// (`end()` in spec.md §4.2). A fresh `Encoder` is needed to keep
    /// writing — ownership transfer stands in for the source's in-place
    /// reset to empty.
    pub fn finish(self) -> Vec<u8> {
        self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    fn push_bytes(&mut self, bytes: &[u8]) -> usize {
        self.buffer.extend_from_slice(bytes);
        bytes.len()
    }

    // ---- fixed-width integers -------------------------------------------------

    pub fn write_uint8(&mut self, value: u8) -> usize {
        self.push_bytes(&[value])
    }

    pub fn write_uint16(&mut self, value: u16) -> usize {
        self.push_bytes(&value.to_le_bytes())
    }

    pub fn write_uint32(&mut self, value: u32) -> usize {
        self.push_bytes(&value.to_le_bytes())
    }

    pub fn write_int8(&mut self, value: i8) -> usize {
        self.push_bytes(&value.to_le_bytes())
    }

    pub fn write_int16(&mut self, value: i16) -> usize {
        self.push_bytes(&value.to_le_bytes())
    }

    pub fn write_int32(&mut self, value: i32) -> usize {
        self.push_bytes(&value.to_le_bytes())
    }

    // ---- varints ----------------------------------------------------------

    /// Base-128 little-endian varint, 1-5 bytes, continuation bit set on
    /// every byte but the last (spec.md §4.2).
    pub fn write_unsigned_varint32(&mut self, mut value: u32) -> usize {
        let start_len = self.buffer.len();
        loop {
            let byte = (value & 0x7f) as u8;
            value >>= 7;
            if value != 0 {
                self.buffer.push(byte | 0x80);
            } else {
                self.buffer.push(byte);
                break;
            }
        }
        self.buffer.len() - start_len
    }

    /// Negative values are sign-extended to 64 bits before encoding, so
    /// they always cost the full 10-byte varint64 (spec.md §4.2).
    pub fn write_signed_varint32(&mut self, value: i32) -> usize {
        if value < 0 {
            self.write_split_varint64(Split64::from_i64(value as i64))
        } else {
            self.write_unsigned_varint32(value as u32)
        }
    }

    pub fn write_unsigned_varint64(&mut self, value: u64) -> usize {
        self.write_split_varint64(Split64::from_u64(value))
    }

    pub fn write_signed_varint64(&mut self, value: i64) -> usize {
        self.write_split_varint64(Split64::from_i64(value))
    }

    /// Emits 7-bit groups of `value`, continuation bit set on every byte
    /// but the last; 1-10 bytes (spec.md §4.1.3, §4.2).
    pub fn write_split_varint64(&mut self, value: Split64) -> usize {
        let mut remaining = value.to_u64();
        let start_len = self.buffer.len();
        loop {
            let byte = (remaining & 0x7f) as u8;
            remaining >>= 7;
            if remaining != 0 {
                self.buffer.push(byte | 0x80);
            } else {
                self.buffer.push(byte);
                break;
            }
        }
        self.buffer.len() - start_len
    }

    pub fn write_zigzag_varint32(&mut self, value: i32) -> usize {
        self.write_unsigned_varint32(int64::to_zigzag32(value))
    }

    pub fn write_zigzag_varint64(&mut self, value: i64) -> usize {
        self.write_split_varint64(Split64::from_u64(int64::to_zigzag64(value)))
    }

    pub fn write_zigzag_varint_hash64(&mut self, hash: Hash64) -> usize {
        self.write_split_varint64(Split64::from_u64(int64::to_zigzag64(hash.to_i64())))
    }

    pub fn write_varint_hash64(&mut self, hash: Hash64) -> usize {
        self.write_split_varint64(hash.to_split64())
    }

    /// `decimal_string_to_hash64` then zigzag-varint-encoded (spec.md §4.2).
    pub fn write_zigzag_varint64_string(&mut self, decimal: &str) -> CodecResult<usize> {
        let hash = Hash64::from_decimal_str(decimal)
            .ok_or_else(|| CodecError::parse_failure(format!("not a decimal integer: {decimal:?}")))?;
        Ok(self.write_zigzag_varint_hash64(hash))
    }

    // ---- fixed64 ------------------------------------------------------------

    pub fn write_fixed_hash64(&mut self, hash: Hash64) -> usize {
        let split = hash.to_split64();
        self.write_uint32(split.lo) + self.write_uint32(split.hi)
    }

    pub fn write_int64(&mut self, value: i64) -> usize {
        self.write_fixed_hash64(Hash64::from_i64(value))
    }

    pub fn write_uint64(&mut self, value: u64) -> usize {
        self.write_fixed_hash64(Hash64::from_u64(value))
    }

    pub fn write_int64_string(&mut self, decimal: &str) -> CodecResult<usize> {
        let hash = Hash64::from_decimal_str(decimal)
            .ok_or_else(|| CodecError::parse_failure(format!("not a decimal integer: {decimal:?}")))?;
        Ok(self.write_fixed_hash64(hash))
    }

    // ---- floating point -------------------------------------------------------

    pub fn write_float(&mut self, value: f32) -> usize {
        self.push_bytes(&value.to_le_bytes())
    }

    pub fn write_double(&mut self, value: f64) -> usize {
        self.push_bytes(&value.to_le_bytes())
    }

    // ---- misc scalars -----------------------------------------------------

    pub fn write_bool(&mut self, value: bool) -> usize {
        self.write_uint8(value as u8)
    }

    /// Enum values are encoded exactly like a signed varint32 (spec.md §4.2);
    /// schema validation that the value is a declared enum member is the
    /// caller's responsibility (spec.md §1, "no schema validation").
    pub fn write_enum(&mut self, value: i32) -> usize {
        self.write_signed_varint32(value)
    }

    /// Raw byte copy; no length prefix. The caller composes the varint32
    /// length prefix itself via `write_unsigned_varint32` (spec.md §6).
    pub fn write_bytes(&mut self, data: &[u8]) -> usize {
        self.push_bytes(data)
    }

    /// Raw UTF-8 copy. `&str` is already guaranteed valid UTF-8 with no
    /// surrogate halves, so the unpaired-high-surrogate question spec.md
    /// §9 raises as open is unreachable from this signature; see
    /// `write_utf16_lossy` for the bridging path where it can occur.
    pub fn write_string(&mut self, value: &str) -> usize {
        self.push_bytes(value.as_bytes())
    }

    /// Encodes raw UTF-16 code units as UTF-8, substituting
    /// `U+FFFD REPLACEMENT CHARACTER` for any unpaired surrogate (the
    /// resolution spec.md §9 leaves open for `write_string`, applied here
    /// where an unpaired surrogate can actually occur).
    pub fn write_utf16_lossy(&mut self, units: &[u16]) -> usize {
        let mut written = 0;
        let mut char_buf = [0u8; 4];
        for result in char::decode_utf16(units.iter().copied()) {
            let ch = result.unwrap_or(char::REPLACEMENT_CHARACTER);
            written += self.push_bytes(ch.encode_utf8(&mut char_buf).as_bytes());
        }
        written
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn uint32_300_matches_spec_scenario_1() {
        let mut enc = Encoder::new();
        enc.write_unsigned_varint32(300);
        assert_eq!(enc.finish(), vec![0xac, 0x02]);
    }

    #[test]
    fn signed_varint32_negative_one_matches_spec_scenario_2() {
        let mut enc = Encoder::new();
        let n = enc.write_signed_varint32(-1);
        assert_eq!(n, protowire_types::limits::SIGNED_VARINT32_NEGATIVE_BYTES);
        assert_eq!(
            enc.finish(),
            vec![0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x01]
        );
    }

    #[test]
    fn zigzag_int64_negative_one_matches_spec_scenario_3() {
        let mut enc = Encoder::new();
        enc.write_zigzag_varint64(-1);
        assert_eq!(enc.finish(), vec![0x01]);
    }

    #[test]
    fn fixed_hash64_matches_spec_scenario_4() {
        let bytes = [0x12u8, 0x34, 0x56, 0x78, 0x87, 0x65, 0x43, 0x21];
        let mut enc = Encoder::new();
        enc.write_fixed_hash64(Hash64(bytes));
        assert_eq!(enc.finish(), bytes.to_vec());
    }

    #[test]
    fn double_one_matches_spec_scenario_5() {
        let mut enc = Encoder::new();
        enc.write_double(1.0);
        assert_eq!(enc.finish(), vec![0, 0, 0, 0, 0, 0, 0xf0, 0x3f]);
    }

    #[test]
    fn varint_canonicality_final_byte_has_no_continuation_bit() {
        for value in [0u64, 1, 127, 128, 16384, u32::MAX as u64, u64::MAX] {
            let mut enc = Encoder::new();
            enc.write_unsigned_varint64(value);
            let bytes = enc.finish();
            assert_eq!(bytes.last().copied().unwrap() & 0x80, 0);
            assert!(bytes.len() <= 10);
        }
    }

    #[test]
    fn zigzag_varint64_string_rejects_non_decimal_input() {
        let mut enc = Encoder::new();
        let err = enc.write_zigzag_varint64_string("not a number").unwrap_err();
        assert_eq!(err.kind, crate::error::CodecErrorKind::ParseFailure);
    }

    #[test]
    fn write_string_is_plain_utf8_copy() {
        let mut enc = Encoder::new();
        let n = enc.write_string("❄");
        assert_eq!(n, 3);
        assert_eq!(enc.finish(), "❄".as_bytes());
    }

    #[test]
    fn write_utf16_lossy_replaces_unpaired_high_surrogate() {
        let mut enc = Encoder::new();
        // 0xd800 is a lone high surrogate with no following low surrogate.
        enc.write_utf16_lossy(&[0xd800]);
        assert_eq!(enc.finish(), char::REPLACEMENT_CHARACTER.to_string().into_bytes());
    }

    #[test]
    fn write_utf16_lossy_merges_surrogate_pairs() {
        // U+1F601 GRINNING FACE, encoded as a surrogate pair.
        let mut enc = Encoder::new();
        enc.write_utf16_lossy(&[0xd83d, 0xde01]);
        assert_eq!(enc.finish(), "😁".as_bytes());
    }
}
