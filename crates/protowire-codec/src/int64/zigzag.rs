//! Zigzag remapping (spec.md §6, GLOSSARY): `n ↦ (n << 1) ^ (n >> bw-1)`.
//! Maps small-magnitude signed integers to small unsigned integers so that
//! a varint encoding stays short regardless of sign.

pub const fn to_zigzag32(value: i32) -> u32 {
    ((value << 1) ^ (value >> 31)) as u32
}

pub const fn from_zigzag32(value: u32) -> i32 {
    ((value >> 1) as i32) ^ -((value & 1) as i32)
}

pub const fn to_zigzag64(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

pub const fn from_zigzag64(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}
