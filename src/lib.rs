// src/lib.rs

pub mod c_api;
pub mod core;
pub mod error;
pub mod history;
pub mod persistence;

pub use crate::core::chunk::render_chunk;
pub use crate::core::decoder::{decode, decode_strict};
pub use crate::core::encoder::{encode, to_geez};
pub use crate::core::types::IntoNumeralValue;
pub use crate::error::{GeezError, Result};
pub use crate::history::{convert_auto, ConversionHistory, ConversionRecord, Direction, HistoryConfig};
