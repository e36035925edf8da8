//! Portable 64-bit integer support (spec.md §4.1): `Split64`/`Hash64`,
//! decimal parsing and formatting, zigzag transforms, and IEEE-754
//! split/join. See `SPEC_FULL.md` §4.1 for why this module uses native
//! `u64`/`i64` arithmetic instead of the source's 32-bit-limb emulation.

mod decimal;
mod float_bits;
mod hash64;
mod split64;
mod zigzag;

pub use decimal::{format_i64_decimal, format_u64_decimal, parse_i64_decimal, parse_u64_decimal};
pub use float_bits::{join_float32, join_float64, split_float32, split_float64};
pub use hash64::Hash64;
pub use split64::{mul_u32_u32, Split64};
pub use zigzag::{from_zigzag32, from_zigzag64, to_zigzag32, to_zigzag64};
