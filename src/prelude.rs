//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use nnmatrix::prelude::*;
//! ```

pub use crate::error::{MatrixError, Result};
pub use crate::primitives::{Matrix, PrintFormat};
