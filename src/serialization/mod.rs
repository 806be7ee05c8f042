//! Matrix serialization.
//!
//! ## Raw format
//! Headerless big-endian `f32` stream, row-major:
//! ```text
//! [rows * cols x 4-byte IEEE-754 float]
//! ```
//! The caller supplies the shape when reading.
//!
//! ```rust
//! use nnmatrix::Matrix;
//! use std::io::Cursor;
//!
//! let weights = Matrix::from([[0.25, -1.0], [2.0, 0.5]]);
//! let mut buf = Vec::new();
//! weights.save(&mut buf).unwrap();
//!
//! let restored = Matrix::read_from(2, 2, Cursor::new(buf)).unwrap();
//! assert_eq!(restored, weights);
//! ```
//!
//! `Matrix` also implements serde's `Serialize`/`Deserialize`; deserialized
//! values are checked for `data.len() == rows * cols`.

pub mod raw;

pub use raw::BYTES_PER_ELEMENT;
