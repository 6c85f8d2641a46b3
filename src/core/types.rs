// src/core/types.rs
use crate::error::{GeezError, Result};

/// 2^64 as an `f64`; the first float that no longer fits in a `u64`.
const U64_LIMIT_F64: f64 = 18_446_744_073_709_551_616.0;

/// A caller value that may be handed to [`encode`](crate::encode).
///
/// Conversion fails with `InvalidInput` for negative values, fractional or
/// non-finite floats, unparsable text and anything beyond `u64::MAX`.
pub trait IntoNumeralValue {
    fn into_numeral_value(self) -> Result<u64>;
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {$(
        impl IntoNumeralValue for $t {
            fn into_numeral_value(self) -> Result<u64> {
                u64::try_from(self)
                    .map_err(|_| GeezError::invalid_input(self, "value exceeds the u64 range"))
            }
        }
    )*};
}

macro_rules! impl_signed {
    ($($t:ty),*) => {$(
        impl IntoNumeralValue for $t {
            fn into_numeral_value(self) -> Result<u64> {
                if self < 0 {
                    return Err(GeezError::invalid_input(self, "negative values have no Ge'ez numeral"));
                }
                u64::try_from(self)
                    .map_err(|_| GeezError::invalid_input(self, "value exceeds the u64 range"))
            }
        }
    )*};
}

impl_unsigned!(u8, u16, u32, u64, u128, usize);
impl_signed!(i8, i16, i32, i64, i128, isize);

fn exact_integer(value: f64) -> std::result::Result<u64, &'static str> {
    if !value.is_finite() {
        Err("not a finite number")
    } else if value < 0.0 {
        Err("negative values have no Ge'ez numeral")
    } else if value.fract() != 0.0 {
        Err("not an exact integer")
    } else if value >= U64_LIMIT_F64 {
        Err("value exceeds the u64 range")
    } else {
        Ok(value as u64)
    }
}

impl IntoNumeralValue for f64 {
    fn into_numeral_value(self) -> Result<u64> {
        exact_integer(self).map_err(|reason| GeezError::invalid_input(self, reason))
    }
}

impl IntoNumeralValue for f32 {
    fn into_numeral_value(self) -> Result<u64> {
        exact_integer(f64::from(self)).map_err(|reason| GeezError::invalid_input(self, reason))
    }
}

/// Parses decimal text exactly: `[+|-]digits[.digits]`, with an all-zero
/// fraction. No float rounding is involved, so every `u64` is reachable.
fn exact_decimal(text: &str) -> std::result::Result<u64, &'static str> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) {
        return Err("not a number");
    }

    let fraction_is_zero = fraction.bytes().all(|b| b == b'0');
    if negative && !(fraction_is_zero && whole.bytes().all(|b| b == b'0')) {
        return Err("negative values have no Ge'ez numeral");
    }
    if !fraction_is_zero {
        return Err("not an exact integer");
    }
    // `whole` is non-empty ASCII digits, so overflow is the only failure left.
    whole.parse::<u64>().map_err(|_| "value exceeds the u64 range")
}

impl IntoNumeralValue for &str {
    fn into_numeral_value(self) -> Result<u64> {
        let text = self.trim();
        if text.is_empty() {
            return Err(GeezError::invalid_input(self, "empty input"));
        }
        exact_decimal(text).map_err(|reason| GeezError::invalid_input(text, reason))
    }
}

impl IntoNumeralValue for String {
    fn into_numeral_value(self) -> Result<u64> {
        self.as_str().into_numeral_value()
    }
}

impl IntoNumeralValue for &String {
    fn into_numeral_value(self) -> Result<u64> {
        self.as_str().into_numeral_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason<T: IntoNumeralValue>(value: T) -> &'static str {
        match value.into_numeral_value() {
            Err(GeezError::InvalidInput { reason, .. }) => reason,
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn unsigned_values_pass_through() {
        assert_eq!(7u8.into_numeral_value().unwrap(), 7);
        assert_eq!(u64::MAX.into_numeral_value().unwrap(), u64::MAX);
        assert_eq!(reason(u128::from(u64::MAX) + 1), "value exceeds the u64 range");
    }

    #[test]
    fn signed_values() {
        assert_eq!(42i32.into_numeral_value().unwrap(), 42);
        assert_eq!(reason(-1i64), "negative values have no Ge'ez numeral");
    }

    #[test]
    fn floats_must_be_exact() {
        assert_eq!(12.0f64.into_numeral_value().unwrap(), 12);
        assert_eq!(reason(3.5f64), "not an exact integer");
        assert_eq!(reason(-2.0f32), "negative values have no Ge'ez numeral");
        assert_eq!(reason(f64::NAN), "not a finite number");
        assert_eq!(reason(f64::INFINITY), "not a finite number");
        assert_eq!(reason(1e20f64), "value exceeds the u64 range");
    }

    #[test]
    fn text_is_parsed() {
        assert_eq!(" 2024 ".into_numeral_value().unwrap(), 2024);
        assert_eq!("7.0".into_numeral_value().unwrap(), 7);
        assert_eq!(reason("-1"), "negative values have no Ge'ez numeral");
        assert_eq!(reason("3.5"), "not an exact integer");
        assert_eq!(reason("twelve"), "not a number");
        assert_eq!(reason(""), "empty input");
        assert_eq!(reason("18446744073709551616"), "value exceeds the u64 range");
        assert_eq!(reason("18446744073709551616.0"), "value exceeds the u64 range");
        assert_eq!(reason("1e3"), "not a number");
        assert_eq!(reason("1.2.0"), "not a number");
        assert_eq!(reason("+-5"), "not a number");
    }

    #[test]
    fn decimal_text_is_exact_beyond_f64_precision() {
        // 2^53 + 1 is the first integer an f64 cannot hold.
        assert_eq!("9007199254740993.0".into_numeral_value().unwrap(), 9_007_199_254_740_993);
        assert_eq!("9007199254740993".into_numeral_value().unwrap(), 9_007_199_254_740_993);
        assert_eq!(reason("9007199254740993.5"), "not an exact integer");
        assert_eq!(reason("18446744073709551615.01"), "not an exact integer");
        assert_eq!("18446744073709551615.000".into_numeral_value().unwrap(), u64::MAX);
    }

    #[test]
    fn signed_text() {
        assert_eq!("+12".into_numeral_value().unwrap(), 12);
        assert_eq!("-0".into_numeral_value().unwrap(), 0);
        assert_eq!("-0.00".into_numeral_value().unwrap(), 0);
        assert_eq!(reason("-3.5"), "negative values have no Ge'ez numeral");
    }
}
