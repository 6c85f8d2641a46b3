// File: src/history.rs
use crate::core::decoder::decode;
use crate::core::encoder::encode;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::debug;

const DEFAULT_CAPACITY: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Arabic integer to Ge'ez numeral.
    ToGeez,
    /// Ge'ez numeral to Arabic integer.
    FromGeez,
}

/// One completed conversion, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub direction: Direction,
    pub input: String,
    pub output: String,
}

#[derive(Debug, Clone, Copy)]
pub struct HistoryConfig {
    /// Oldest records are dropped once this many are held.
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Converts one line of user input, guessing the direction.
///
/// Input containing an ASCII digit, a sign or a decimal point is treated as
/// an Arabic number and encoded, so "-1" and "3.5" surface `InvalidInput`.
/// Everything else is decoded leniently.
pub fn convert_auto(input: &str) -> Result<ConversionRecord> {
    let input = input.trim();
    let looks_arabic = input
        .chars()
        .any(|ch| ch.is_ascii_digit() || ch == '-' || ch == '+' || ch == '.');

    let (direction, output) = if looks_arabic {
        (Direction::ToGeez, encode(input)?)
    } else {
        (Direction::FromGeez, decode(input).to_string())
    };

    Ok(ConversionRecord {
        direction,
        input: input.to_string(),
        output,
    })
}

/// A bounded log of conversions, newest last.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionHistory {
    capacity: usize,
    records: VecDeque<ConversionRecord>,
}

impl ConversionHistory {
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            capacity: config.capacity.max(1),
            records: VecDeque::with_capacity(config.capacity.min(DEFAULT_CAPACITY)),
        }
    }

    /// Appends a record, evicting the oldest one when full.
    pub fn record(&mut self, record: ConversionRecord) {
        while self.records.len() >= self.capacity.max(1) {
            self.records.pop_front();
            debug!(capacity = self.capacity, "history full, dropped oldest record");
        }
        self.records.push_back(record);
    }

    /// Runs [`convert_auto`] and records the result on success.
    pub fn convert(&mut self, input: &str) -> Result<ConversionRecord> {
        let record = convert_auto(input)?;
        self.record(record.clone());
        Ok(record)
    }

    pub fn records(&self) -> impl Iterator<Item = &ConversionRecord> {
        self.records.iter()
    }

    pub fn latest(&self) -> Option<&ConversionRecord> {
        self.records.back()
    }

    /// Changes the capacity, dropping the oldest records that no longer fit.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        let excess = self.records.len().saturating_sub(self.capacity);
        if excess > 0 {
            self.records.drain(..excess);
            debug!(capacity = self.capacity, dropped = excess, "history shrunk");
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl Default for ConversionHistory {
    fn default() -> Self {
        Self::new(HistoryConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeezError;

    #[test]
    fn detects_direction() {
        let to = convert_auto(" 2024 ").unwrap();
        assert_eq!(to.direction, Direction::ToGeez);
        assert_eq!(to.input, "2024");
        assert_eq!(to.output, "፳፻፳፬");

        let from = convert_auto("፳፻፳፬").unwrap();
        assert_eq!(from.direction, Direction::FromGeez);
        assert_eq!(from.output, "2024");
    }

    #[test]
    fn arabic_errors_surface() {
        assert!(matches!(convert_auto("-5"), Err(GeezError::InvalidInput { .. })));
        assert!(matches!(convert_auto("3.5"), Err(GeezError::InvalidInput { .. })));
    }

    #[test]
    fn capacity_evicts_oldest() {
        let mut history = ConversionHistory::new(HistoryConfig { capacity: 2 });
        history.convert("1").unwrap();
        history.convert("2").unwrap();
        history.convert("3").unwrap();
        let inputs: Vec<&str> = history.records().map(|r| r.input.as_str()).collect();
        assert_eq!(inputs, ["2", "3"]);
        assert_eq!(history.latest().unwrap().output, "፫");
    }

    #[test]
    fn shrinking_capacity_keeps_newest() {
        let mut history = ConversionHistory::new(HistoryConfig { capacity: 5 });
        for n in 1..=4 {
            history.convert(&n.to_string()).unwrap();
        }
        history.set_capacity(2);
        assert_eq!(history.capacity(), 2);
        let inputs: Vec<&str> = history.records().map(|r| r.input.as_str()).collect();
        assert_eq!(inputs, ["3", "4"]);

        history.set_capacity(10);
        assert_eq!(history.len(), 2);
        history.convert("5").unwrap();
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn failed_conversions_are_not_recorded() {
        let mut history = ConversionHistory::default();
        assert!(history.convert("-1").is_err());
        assert!(history.is_empty());
    }
}
