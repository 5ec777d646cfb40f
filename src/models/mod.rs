//! Models Module - Data Structures & Configuration
//!
//! Config file shape, API response shape and the error taxonomy.

pub mod config;
pub mod errors;
pub mod types;

pub use config::*;
pub use errors::*;
pub use types::*;
