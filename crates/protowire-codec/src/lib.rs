//! Protocol Buffers wire-format encode/decode core: varint, zigzag, fixed
//! width, and length-delimited primitives, plus the portable 64-bit
//! integer support they're built on. No message-schema layer; callers
//! drive tag/wire-type dispatch and field composition themselves.

pub mod byte_source;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod int64;
pub mod pool;

pub use byte_source::{ByteSource, CoercedBytes};
pub use decoder::{Decoder, DecoderState};
pub use encoder::Encoder;
pub use error::{CodecError, CodecErrorKind, CodecResult};
pub use int64::{Hash64, Split64};
pub use pool::DecoderPool;

pub use protowire_types::{field_type_to_wire_type, FieldType, WireType};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quickcheck_macros::quickcheck;

    /// End-to-end encoder/decoder round trip for every scalar wire shape,
    /// exercised together rather than through each type's own unit tests.
    #[quickcheck]
    fn scalar_round_trip(
        u8_val: u8,
        i32_val: i32,
        u64_val: u64,
        i64_val: i64,
        f32_val: f32,
        f64_val: f64,
        flag: bool,
    ) -> bool {
        let mut enc = Encoder::new();
        enc.write_uint8(u8_val);
        enc.write_zigzag_varint32(i32_val);
        enc.write_unsigned_varint64(u64_val);
        enc.write_fixed_hash64(Hash64::from_i64(i64_val));
        enc.write_float(f32_val);
        enc.write_double(f64_val);
        enc.write_bool(flag);
        let bytes = enc.finish();

        let mut dec = Decoder::new();
        dec.set_block(ByteSource::Slice(&bytes)).unwrap();
        dec.read_uint8().unwrap() == u8_val
            && dec.read_zigzag_varint32().unwrap() == i32_val
            && dec.read_unsigned_varint64().unwrap() == u64_val
            && dec.read_fixed_hash64().unwrap().to_i64() == i64_val
            && dec.read_float().unwrap().to_bits() == f32_val.to_bits()
            && dec.read_double().unwrap().to_bits() == f64_val.to_bits()
            && dec.read_bool().unwrap() == flag
            && dec.at_end()
    }

    #[test]
    fn length_delimited_bytes_round_trip_via_a_varint32_prefix() {
        let payload = b"hello wire format";
        let mut enc = Encoder::new();
        enc.write_unsigned_varint32(payload.len() as u32);
        enc.write_bytes(payload);
        let bytes = enc.finish();

        let mut dec = Decoder::new();
        dec.set_block(ByteSource::Slice(&bytes)).unwrap();
        let len = dec.read_unsigned_varint32().unwrap() as usize;
        assert_eq!(dec.read_bytes(len).unwrap(), payload.to_vec());
        assert!(dec.at_end());
    }

    #[test]
    fn length_delimited_string_round_trips_via_a_varint32_prefix() {
        let text = "\u{2744} snowflake \u{1f601}";
        let mut enc = Encoder::new();
        enc.write_unsigned_varint32(text.len() as u32);
        enc.write_string(text);
        let bytes = enc.finish();

        let mut dec = Decoder::new();
        dec.set_block(ByteSource::Slice(&bytes)).unwrap();
        let len = dec.read_unsigned_varint32().unwrap() as usize;
        assert_eq!(dec.read_string(len).unwrap(), text);
    }

    #[test]
    fn field_type_to_wire_type_covers_every_protowire_types_field() {
        assert_eq!(field_type_to_wire_type(FieldType::Double), WireType::Fixed64);
        assert_eq!(field_type_to_wire_type(FieldType::Int32), WireType::Varint);
        assert_eq!(field_type_to_wire_type(FieldType::Bytes), WireType::LengthDelimited);
    }
}
