// File: src/core/symbols.rs
use std::collections::HashMap;
use std::sync::OnceLock;

/// Face value 100. Multiplies the two-digit value written before it.
pub const HUNDRED: char = '፻';
/// Face value 10000. A run of `k` of these multiplies the group by 10000^k.
pub const MYRIAD: char = '፼';

pub const HUNDRED_VALUE: u32 = 100;
pub const MYRIAD_VALUE: u32 = 10_000;

/// The script has no zero; the encoder falls back to the ASCII digit.
pub const ZERO: &str = "0";

/// Every face value below 100 that has a glyph of its own: ones, then tens.
pub const DIGITS: [(u32, char); 18] = [
    (1, '፩'),
    (2, '፪'),
    (3, '፫'),
    (4, '፬'),
    (5, '፭'),
    (6, '፮'),
    (7, '፯'),
    (8, '፰'),
    (9, '፱'),
    (10, '፲'),
    (20, '፳'),
    (30, '፴'),
    (40, '፵'),
    (50, '፶'),
    (60, '፷'),
    (70, '፸'),
    (80, '፹'),
    (90, '፺'),
];

static REVERSE_INDEX: OnceLock<HashMap<char, u32>> = OnceLock::new();

fn reverse_index() -> &'static HashMap<char, u32> {
    REVERSE_INDEX.get_or_init(|| {
        let mut index: HashMap<char, u32> = DIGITS.iter().map(|&(value, glyph)| (glyph, value)).collect();
        index.insert(HUNDRED, HUNDRED_VALUE);
        index.insert(MYRIAD, MYRIAD_VALUE);
        index
    })
}

/// Glyph for a face value in {1..9, 10, 20, .., 90}.
pub fn digit_glyph(value: u32) -> Option<char> {
    match value {
        1..=9 => Some(DIGITS[(value - 1) as usize].1),
        10..=90 if value % 10 == 0 => Some(DIGITS[(value / 10 + 8) as usize].1),
        _ => None,
    }
}

/// Glyph for any face value, including the Hundred and Myriad glyphs.
pub fn glyph_for(value: u32) -> Option<char> {
    match value {
        HUNDRED_VALUE => Some(HUNDRED),
        MYRIAD_VALUE => Some(MYRIAD),
        _ => digit_glyph(value),
    }
}

/// Face value of a glyph, or `None` if the character is not a numeral glyph.
pub fn value_of(glyph: char) -> Option<u32> {
    reverse_index().get(&glyph).copied()
}

pub fn is_hundred(ch: char) -> bool {
    ch == HUNDRED
}

pub fn is_myriad(ch: char) -> bool {
    ch == MYRIAD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_and_reverse_agree() {
        for &(value, glyph) in DIGITS.iter() {
            assert_eq!(digit_glyph(value), Some(glyph));
            assert_eq!(glyph_for(value), Some(glyph));
            assert_eq!(value_of(glyph), Some(value));
        }
    }

    #[test]
    fn distinguished_glyphs() {
        assert_eq!(glyph_for(100), Some(HUNDRED));
        assert_eq!(glyph_for(10_000), Some(MYRIAD));
        assert_eq!(value_of(HUNDRED), Some(100));
        assert_eq!(value_of(MYRIAD), Some(10_000));
        assert_eq!(digit_glyph(100), None);
    }

    #[test]
    fn values_without_a_glyph() {
        for value in [0, 11, 15, 99, 101, 200, 1000] {
            assert_eq!(glyph_for(value), None, "value {value}");
        }
    }

    #[test]
    fn unknown_characters_are_not_digits() {
        assert_eq!(value_of('a'), None);
        assert_eq!(value_of('0'), None);
        assert_eq!(value_of('ሀ'), None);
    }

    #[test]
    fn alphabet_is_the_ethiopic_number_block() {
        let mut expected = '\u{1369}';
        for &(_, glyph) in DIGITS.iter() {
            assert_eq!(glyph, expected);
            expected = char::from_u32(expected as u32 + 1).unwrap();
        }
        assert_eq!(HUNDRED, '\u{137B}');
        assert_eq!(MYRIAD, '\u{137C}');
    }
}
