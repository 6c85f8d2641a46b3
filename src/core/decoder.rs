// File: src/core/decoder.rs
use crate::core::encoder::to_geez;
use crate::core::symbols::{is_hundred, is_myriad, value_of, ZERO};
use crate::error::{GeezError, Result};
use tracing::{debug, trace, warn};

const MYRIAD_FACTOR: u64 = 10_000;

/// Outcome of one left-to-right scan.
struct Scan {
    value: u64,
    overflowed: bool,
}

/// Adds and multiplies with saturation, remembering whether it ever saturated.
struct Accumulator {
    overflowed: bool,
}

impl Accumulator {
    fn add(&mut self, a: u64, b: u64) -> u64 {
        a.checked_add(b).unwrap_or_else(|| {
            self.overflowed = true;
            u64::MAX
        })
    }

    fn mul(&mut self, a: u64, b: u64) -> u64 {
        a.checked_mul(b).unwrap_or_else(|| {
            self.overflowed = true;
            u64::MAX
        })
    }

    /// 10000^level, saturating.
    fn myriad_power(&mut self, level: usize) -> u64 {
        match u32::try_from(level).ok().and_then(|level| MYRIAD_FACTOR.checked_pow(level)) {
            Some(power) => power,
            None => {
                self.overflowed = true;
                u64::MAX
            }
        }
    }
}

fn scan(numeral: &str) -> Scan {
    let mut acc = Accumulator { overflowed: false };
    let mut total: u64 = 0;
    let mut chars = numeral.chars().peekable();

    while chars.peek().is_some() {
        let mut chunk: u64 = 0;
        while let Some(ch) = chars.next_if(|&ch| !is_myriad(ch)) {
            if is_hundred(ch) {
                chunk = acc.mul(chunk.max(1), 100);
            } else if let Some(value) = value_of(ch) {
                chunk = acc.add(chunk, u64::from(value));
            } else {
                debug!(glyph = ?ch, "skipping unknown glyph");
            }
        }

        let mut level = 0usize;
        while chars.next_if(|&ch| is_myriad(ch)).is_some() {
            level += 1;
        }

        if level > 0 {
            // A run with nothing in front of it stands for one group of that level.
            let power = acc.myriad_power(level);
            let group = acc.mul(chunk.max(1), power);
            total = acc.add(total, group);
        } else {
            total = acc.add(total, chunk);
        }
    }

    Scan {
        value: total,
        overflowed: acc.overflowed,
    }
}

/// Decodes a Ge'ez numeral, leniently.
///
/// Never fails: characters outside the numeral alphabet are skipped and
/// contribute nothing, and values beyond `u64::MAX` saturate. A Myriad run
/// with no digit in front of it counts as one group of its level, which is
/// how the encoder writes a leading group of one.
pub fn decode(numeral: &str) -> u64 {
    let scan = scan(numeral);
    if scan.overflowed {
        warn!(numeral, "numeral exceeds u64, saturating");
    }
    trace!(numeral, value = scan.value, "decoded");
    scan.value
}

/// Decodes only canonical numerals, the exact strings [`to_geez`] produces.
///
/// `"0"` decodes to zero. Anything else is rejected with `Empty`,
/// `UnknownGlyph`, `Overflow` or `NonCanonical`.
pub fn decode_strict(numeral: &str) -> Result<u64> {
    if numeral.is_empty() {
        return Err(GeezError::Empty);
    }
    if numeral == ZERO {
        return Ok(0);
    }
    if let Some((position, glyph)) = numeral.chars().enumerate().find(|&(_, ch)| value_of(ch).is_none()) {
        return Err(GeezError::UnknownGlyph { glyph, position });
    }

    let scan = scan(numeral);
    if scan.overflowed {
        return Err(GeezError::Overflow);
    }
    let canonical = to_geez(scan.value);
    if canonical != numeral {
        return Err(GeezError::NonCanonical { canonical });
    }
    Ok(scan.value)
}
