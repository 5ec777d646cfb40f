//! Providers Module - External Services
//!
//! Outbound calls: the distance-matrix API and SMTP delivery.

pub mod distance_matrix;
pub mod smtp;

pub use distance_matrix::*;
pub use smtp::*;
