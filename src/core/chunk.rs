// File: src/core/chunk.rs
use crate::core::symbols::{digit_glyph, HUNDRED};

/// Base of the grouping: every Myriad glyph stands for one factor of this.
pub const CHUNK_BASE: u64 = 10_000;

/// Renders a chunk in `[0, 9999]` without any Myriad glyph, or `None` when
/// the chunk is out of that range.
///
/// Zero renders as the empty string. A hundreds count of one is written as
/// the bare Hundred glyph, never as "one hundred".
pub fn render_chunk(chunk: u32) -> Option<String> {
    if u64::from(chunk) >= CHUNK_BASE {
        return None;
    }
    let mut out = String::new();
    push_chunk(&mut out, chunk);
    Some(out)
}

pub(crate) fn push_chunk(out: &mut String, chunk: u32) {
    debug_assert!(u64::from(chunk) < CHUNK_BASE, "chunk out of range: {chunk}");
    if chunk >= 100 {
        let hundreds = chunk / 100;
        if hundreds != 1 {
            push_two_digit(out, hundreds);
        }
        out.push(HUNDRED);
        push_two_digit(out, chunk % 100);
    } else {
        push_two_digit(out, chunk);
    }
}

/// Tens glyph then ones glyph, dropping whichever is zero.
fn push_two_digit(out: &mut String, n: u32) {
    if let Some(glyph) = digit_glyph(n) {
        out.push(glyph);
        return;
    }
    if let Some(tens) = digit_glyph(n / 10 * 10) {
        out.push(tens);
    }
    if let Some(ones) = digit_glyph(n % 10) {
        out.push(ones);
    }
}
