//! `Hash64`: the 8-byte opaque carrier for a lossless 64-bit value at an
//! API boundary that cannot hold a 64-bit integer natively (spec.md §3,
//! GLOSSARY). The source materializes this as an 8-unit character string;
//! here it is simply `[u8; 8]`, little-endian by contract (spec.md §3).

use super::decimal::{parse_i64_decimal, parse_u64_decimal};
use super::split64::Split64;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Hash64(pub [u8; 8]);

impl Hash64 {
    pub const ZERO: Self = Self([0; 8]);

    pub fn from_u64(value: u64) -> Self {
        Self(value.to_le_bytes())
    }

    pub fn to_u64(self) -> u64 {
        u64::from_le_bytes(self.0)
    }

    pub fn from_i64(value: i64) -> Self {
        Self(value.to_le_bytes())
    }

    pub fn to_i64(self) -> i64 {
        i64::from_le_bytes(self.0)
    }

    pub fn from_split64(split: Split64) -> Self {
        Self::from_u64(split.to_u64())
    }

    pub fn to_split64(self) -> Split64 {
        Split64::from_u64(self.to_u64())
    }

    pub fn to_unsigned_decimal_string(self) -> String {
        self.to_u64().to_string()
    }

    pub fn to_signed_decimal_string(self) -> String {
        self.to_i64().to_string()
    }

    /// `decimal_string_to_hash64` (spec.md §4.1.3): the magnitude is always
    /// parsed as unsigned; a leading `-` two's-complement-negates the
    /// result afterwards. Accepts both unsigned values up to `u64::MAX`
    /// and signed values down to `i64::MIN` through the same entry point,
    /// matching the source exactly.
    pub fn from_decimal_str(s: &str) -> Option<Self> {
        match s.strip_prefix('-') {
            Some(rest) => parse_u64_decimal(rest).map(|magnitude| Self::from_u64(magnitude.wrapping_neg())),
            None => parse_u64_decimal(s).map(Self::from_u64),
        }
    }

    pub fn from_unsigned_decimal_str(s: &str) -> Option<Self> {
        parse_u64_decimal(s).map(Self::from_u64)
    }

    pub fn from_signed_decimal_str(s: &str) -> Option<Self> {
        parse_i64_decimal(s).map(Self::from_i64)
    }
}
