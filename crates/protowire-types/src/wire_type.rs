/// The five (plus two legacy) physical encodings a protobuf field can use
/// on the wire. See <https://protobuf.dev/programming-guides/encoding/>.
///
/// The numeric values are part of the wire format itself: they are the low
/// three bits of every field tag, so they must not be renumbered.
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum WireType {
    Varint = 0,
    Fixed64 = 1,
    LengthDelimited = 2,
    /// Deprecated by upstream protobuf; kept for legacy field-type mapping.
    StartGroup = 3,
    /// Deprecated by upstream protobuf; kept for legacy field-type mapping.
    EndGroup = 4,
    Fixed32 = 5,
}

impl WireType {
    pub const fn from_u8(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::Varint,
            1 => Self::Fixed64,
            2 => Self::LengthDelimited,
            3 => Self::StartGroup,
            4 => Self::EndGroup,
            5 => Self::Fixed32,
            _ => return None,
        })
    }
}
