// File: src/core/encoder.rs
use crate::core::chunk::{push_chunk, CHUNK_BASE};
use crate::core::symbols::{MYRIAD, ZERO};
use crate::core::types::IntoNumeralValue;
use crate::error::Result;
use std::iter;
use tracing::trace;

/// Encodes a non-negative integer as its canonical Ge'ez numeral.
///
/// Fails with `InvalidInput` before doing any work if `value` is negative,
/// fractional, or does not fit in a `u64`.
pub fn encode<T: IntoNumeralValue>(value: T) -> Result<String> {
    let n = value.into_numeral_value()?;
    Ok(to_geez(n))
}

/// Infallible core of [`encode`].
///
/// Groups are written most significant first, each followed by one Myriad
/// glyph per level. Empty higher groups are left out entirely, since the run
/// length after the next group already fixes its level. A group of exactly
/// one is written as the bare Myriad run only when it leads the numeral;
/// anywhere else the run would merge with the previous group's run.
pub fn to_geez(n: u64) -> String {
    if n == 0 {
        return ZERO.to_string();
    }

    let groups = split_groups(n);
    let leading = groups.len() - 1;
    let mut out = String::with_capacity(groups.len() * 16);

    for (level, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        let bare_run = group == 1 && level > 0 && level == leading;
        if !bare_run {
            push_chunk(&mut out, group);
        }
        out.extend(iter::repeat(MYRIAD).take(level));
    }

    trace!(value = n, numeral = %out, "encoded");
    out
}

/// Base-10000 groups, least significant first.
fn split_groups(mut n: u64) -> Vec<u32> {
    let mut groups = Vec::with_capacity(5);
    while n > 0 {
        groups.push((n % CHUNK_BASE) as u32);
        n /= CHUNK_BASE;
    }
    groups
}
