// src/core/mod.rs

pub mod chunk;
pub mod decoder;
pub mod encoder;
pub mod symbols;
pub mod types;
