//! Field/wire type tags and numeric limits shared by the protobuf
//! wire-format codec (`protowire-codec`). Mirrors how `ancvm-types` is the
//! leaf crate consumed by `ancvm-binary`: no dependencies, no logic beyond
//! what a constant or a pure mapping function can express.

pub mod field_type;
pub mod limits;
pub mod wire_type;

pub use field_type::{field_type_to_wire_type, FieldType};
pub use wire_type::WireType;
