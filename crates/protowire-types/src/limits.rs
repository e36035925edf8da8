//! Numeric limits and wire-format size constants shared by the encoder and
//! decoder. Grouped here (rather than duplicated at each call site) the
//! same way `ancvm-types` centralizes `OPERAND_SIZE_IN_BYTES`.

/// Maximum number of bytes a base-128 varint can occupy for a 32-bit value.
pub const MAX_VARINT32_BYTES: usize = 5;

/// Maximum number of bytes a base-128 varint can occupy for a 64-bit value.
pub const MAX_VARINT64_BYTES: usize = 10;

/// `write_signed_varint32` always emits this many bytes for a negative
/// input: the value is sign-extended to 64 bits before varint-encoding, so
/// any negative `i32` costs the full 64-bit varint length (spec.md §4.2).
pub const SIGNED_VARINT32_NEGATIVE_BYTES: usize = 10;

/// Cap on the number of idle `Decoder` instances a `DecoderPool` retains.
pub const DECODER_POOL_CAPACITY: usize = 100;
