//! Core compute primitives.
//!
//! [`Matrix`] is the only numeric type; everything a feed-forward network
//! computes is expressed through its operations.

mod display;
mod matrix;

pub use display::PrintFormat;
pub use matrix::Matrix;
