//! Decimal-string ↔ 64-bit integer conversion (spec.md §4.1.1 "parse
//! decimal" / "format decimal", §4.1.2 for the signed variant).
//!
//! The spec's parse algorithm ("scan left-to-right, `result = result*10 +
//! digit`, reject any non-digit with an absent result, never throw") is
//! implemented digit-by-digit rather than via `str::parse`, because
//! `str::parse::<u64>` folds overflow and malformed-input into the same
//! `Err` and this crate needs to distinguish a rejected character
//! (`CodecErrorKind::ParseFailure`) from the source's documented silent
//! truncation on overflow (the source never errors on overflow; it just
//! loses precision). `wrapping_mul`/`wrapping_add` reproduce that
//! truncating-but-never-erroring behavior on native `u64`.

/// Parses an unsigned decimal string. Returns `None` for an empty string or
/// the first non-ASCII-digit byte — never panics.
pub fn parse_u64_decimal(s: &str) -> Option<u64> {
    if s.is_empty() {
        return None;
    }
    let mut acc: u64 = 0;
    for byte in s.bytes() {
        if !byte.is_ascii_digit() {
            return None;
        }
        acc = acc.wrapping_mul(10).wrapping_add((byte - b'0') as u64);
    }
    Some(acc)
}

/// Parses a signed decimal string (`^-?[0-9]+$`, spec.md §6). An optional
/// leading `-` negates the parsed magnitude via two's complement.
pub fn parse_i64_decimal(s: &str) -> Option<i64> {
    match s.strip_prefix('-') {
        Some(rest) => {
            let magnitude = parse_u64_decimal(rest)?;
            Some((magnitude as i64).wrapping_neg())
        }
        None => parse_u64_decimal(s).map(|magnitude| magnitude as i64),
    }
}

pub fn format_u64_decimal(value: u64) -> String {
    value.to_string()
}

pub fn format_i64_decimal(value: i64) -> String {
    value.to_string()
}
