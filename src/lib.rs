//! nnmatrix: dense `f32` matrices for feed-forward neural networks.
//!
//! A [`Matrix`] is a fixed-shape, row-major grid of `f32` values. Every
//! arithmetic operation returns a new matrix and leaves its operands
//! untouched, so forward and backward passes read as plain expressions.
//!
//! # Quick Start
//!
//! ```
//! use nnmatrix::prelude::*;
//!
//! let a = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
//! let b = Matrix::from([[5.0, 6.0], [7.0, 8.0]]);
//!
//! assert_eq!(a.times(&b).unwrap(), Matrix::from([[19.0, 22.0], [43.0, 50.0]]));
//! assert_eq!(a.plus(&b).unwrap(), Matrix::from([[6.0, 8.0], [10.0, 12.0]]));
//! assert_eq!(a.transpose(), Matrix::from([[1.0, 3.0], [2.0, 4.0]]));
//! assert_eq!(a.sum(), 10.0);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: the [`Matrix`] type and its text rendering
//! - [`serialization`]: raw big-endian save/load
//! - [`error`]: error taxonomy

pub mod error;
pub mod prelude;
pub mod primitives;
pub mod serialization;

pub use error::{MatrixError, Result};
pub use primitives::{Matrix, PrintFormat};
