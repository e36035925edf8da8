use crate::wire_type::WireType;

/// Field-type codes 1-18 match upstream `FieldDescriptorProto.Type`; 30 and
/// 31 are this codec's own extension for the lossless 64-bit "hash"
/// surface (spec.md §6), fixed-width and varint-encoded respectively.
///
/// note that the numbering is part of the schema-description wire contract
/// (it is what a `.proto` file's `FieldDescriptorProto` carries), not an
/// implementation detail, so the discriminants below must not be reordered.
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum FieldType {
    Double = 1,
    Float = 2,
    Int64 = 3,
    Uint64 = 4,
    Int32 = 5,
    Fixed64 = 6,
    Fixed32 = 7,
    Bool = 8,
    String = 9,
    Group = 10,
    Message = 11,
    Bytes = 12,
    Uint32 = 13,
    Enum = 14,
    Sfixed32 = 15,
    Sfixed64 = 16,
    Sint32 = 17,
    Sint64 = 18,
    /// Extension: fixed64-encoded `Hash64`.
    HashFixed64 = 30,
    /// Extension: varint-encoded `Hash64` (zigzag-free).
    HashVarint64 = 31,
}

impl FieldType {
    pub const fn from_u8(value: u8) -> Option<Self> {
        Some(match value {
            1 => Self::Double,
            2 => Self::Float,
            3 => Self::Int64,
            4 => Self::Uint64,
            5 => Self::Int32,
            6 => Self::Fixed64,
            7 => Self::Fixed32,
            8 => Self::Bool,
            9 => Self::String,
            10 => Self::Group,
            11 => Self::Message,
            12 => Self::Bytes,
            13 => Self::Uint32,
            14 => Self::Enum,
            15 => Self::Sfixed32,
            16 => Self::Sfixed64,
            17 => Self::Sint32,
            18 => Self::Sint64,
            30 => Self::HashFixed64,
            31 => Self::HashVarint64,
            _ => return None,
        })
    }
}

/// Maps a field's declared type to the physical wire encoding used to
/// transmit it. Pure and total over every `FieldType` variant (spec.md §6).
pub const fn field_type_to_wire_type(field_type: FieldType) -> WireType {
    match field_type {
        FieldType::Double => WireType::Fixed64,
        FieldType::Float => WireType::Fixed32,
        FieldType::Int64 => WireType::Varint,
        FieldType::Uint64 => WireType::Varint,
        FieldType::Int32 => WireType::Varint,
        FieldType::Fixed64 => WireType::Fixed64,
        FieldType::Fixed32 => WireType::Fixed32,
        FieldType::Bool => WireType::Varint,
        FieldType::String => WireType::LengthDelimited,
        FieldType::Group => WireType::StartGroup,
        FieldType::Message => WireType::LengthDelimited,
        FieldType::Bytes => WireType::LengthDelimited,
        FieldType::Uint32 => WireType::Varint,
        FieldType::Enum => WireType::Varint,
        FieldType::Sfixed32 => WireType::Fixed32,
        FieldType::Sfixed64 => WireType::Fixed64,
        FieldType::Sint32 => WireType::Varint,
        FieldType::Sint64 => WireType::Varint,
        FieldType::HashFixed64 => WireType::Fixed64,
        FieldType::HashVarint64 => WireType::Varint,
    }
}
