//! Core Module - Decision logic

pub mod threshold;

pub use threshold::*;
