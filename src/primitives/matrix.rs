//! Matrix type for 2D numeric data.

use crate::error::{element_count, MatrixError, Result};
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A dense 2D matrix of `f32` values (row-major storage).
///
/// Arithmetic never mutates its operands: `times`, `plus`, `minus`,
/// `hadamard_times`, `scalar_times`, `array_pow` and `transpose` all return
/// a freshly allocated matrix. The shape is fixed at construction.
///
/// # Examples
///
/// ```
/// use nnmatrix::Matrix;
///
/// let w = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
/// let x = Matrix::from([[1.0], [1.0]]);
/// let b = Matrix::filled(2, 1, 0.5);
///
/// let y = w.times(&x).and_then(|wx| wx.plus(&b)).expect("compatible shapes");
/// assert_eq!(y, Matrix::from([[3.5], [7.5]]));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct Matrix {
    data: Vec<f32>,
    rows: usize,
    cols: usize,
}

/// Unvalidated serde form of [`Matrix`].
#[derive(Deserialize)]
struct RawMatrix {
    data: Vec<f32>,
    rows: usize,
    cols: usize,
}

impl TryFrom<RawMatrix> for Matrix {
    type Error = MatrixError;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        Matrix::from_vec(raw.rows, raw.cols, raw.data)
    }
}

impl Matrix {
    /// Creates a `rows x cols` matrix of zeros.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, 0.0)
    }

    /// Creates a `rows x cols` matrix with every element set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`. Use [`Matrix::from_vec`]
    /// for shapes that come from untrusted input.
    #[must_use]
    pub fn filled(rows: usize, cols: usize, value: f32) -> Self {
        let len = element_count(rows, cols)
            .unwrap_or_else(|_| panic!("matrix shape {rows}x{cols} overflows usize"));
        Self {
            data: vec![value; len],
            rows,
            cols,
        }
    }

    /// Creates a matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, 0.0)
    }

    /// Creates a matrix of ones.
    #[must_use]
    pub fn ones(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, 1.0)
    }

    /// Creates an `n x n` identity matrix.
    #[must_use]
    pub fn eye(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Creates a new matrix from a row-major vector of data.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeOverflow`] if `rows * cols` overflows
    /// `usize`, and [`MatrixError::DataLength`] if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self> {
        let expected = element_count(rows, cols)?;
        if data.len() != expected {
            return Err(MatrixError::DataLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix from nested rows.
    ///
    /// The column count is taken from the first row; an empty slice yields
    /// a `0 x 0` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::RaggedRows`] if any row's length differs from
    /// the first row's, and [`MatrixError::ShapeOverflow`] if the element
    /// count overflows `usize`.
    pub fn from_rows<R: AsRef<[f32]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(element_count(rows.len(), cols)?);

        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(MatrixError::RaggedRows {
                    row: i,
                    expected: cols,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Returns the number of elements (rows * cols).
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the matrix has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the underlying row-major data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Returns row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows`.
    #[must_use]
    pub fn row(&self, i: usize) -> &[f32] {
        let start = i * self.cols;
        &self.data[start..start + self.cols]
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// Gets element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::OutOfRange`] if either index is outside the
    /// matrix extents.
    pub fn get(&self, row: usize, col: usize) -> Result<f32> {
        let idx = self.offset(row, col)?;
        Ok(self.data[idx])
    }

    /// Sets element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::OutOfRange`] if either index is outside the
    /// matrix extents.
    pub fn set(&mut self, row: usize, col: usize, value: f32) -> Result<()> {
        let idx = self.offset(row, col)?;
        self.data[idx] = value;
        Ok(())
    }

    /// Sets every element to `value`.
    pub fn set_all(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// Overwrites every element with the corresponding element of `other`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] if the shapes differ; `self`
    /// is left unchanged.
    pub fn set_from(&mut self, other: &Self) -> Result<()> {
        self.check_same_shape("copy", other)?;
        self.data.copy_from_slice(&other.data);
        Ok(())
    }

    fn check_same_shape(&self, op: &'static str, other: &Self) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(MatrixError::shape_mismatch(op, self.shape(), other.shape()));
        }
        Ok(())
    }

    fn zip_with(
        &self,
        other: &Self,
        op: &'static str,
        f: impl Fn(f32, f32) -> f32,
    ) -> Result<Self> {
        self.check_same_shape(op, other)?;

        let data: Vec<f32> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();

        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    fn map(&self, f: impl Fn(f32) -> f32) -> Self {
        Self {
            data: self.data.iter().map(|&x| f(x)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Matrix-matrix multiplication.
    ///
    /// Each output element is accumulated in `f32`, starting from `0.0` and
    /// adding `self[i,k] * other[k,j]` for `k = 0, 1, ..` in order, so
    /// results are reproducible bit for bit.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] if `self.cols != other.rows`.
    pub fn times(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(MatrixError::shape_mismatch(
                "multiply",
                self.shape(),
                other.shape(),
            ));
        }
        log::trace!(
            "matmul ({},{}) x ({},{})",
            self.rows,
            self.cols,
            other.rows,
            other.cols
        );

        let mut result = vec![0.0; self.rows * other.cols];
        for i in 0..self.rows {
            let lhs = self.row(i);
            for j in 0..other.cols {
                let mut sum = 0.0_f32;
                for (k, &a) in lhs.iter().enumerate() {
                    sum += a * other.data[k * other.cols + j];
                }
                result[i * other.cols + j] = sum;
            }
        }

        Ok(Self {
            data: result,
            rows: self.rows,
            cols: other.cols,
        })
    }

    /// Computes the Hadamard product: corresponding elements multiplied.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] if the shapes differ.
    pub fn hadamard_times(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "array multiply", |a, b| a * b)
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] if the shapes differ.
    pub fn plus(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    /// Subtracts another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] if the shapes differ.
    pub fn minus(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "subtract", |a, b| a - b)
    }

    /// Multiplies each element by a scalar.
    #[must_use]
    pub fn scalar_times(&self, c: f32) -> Self {
        self.map(|x| x * c)
    }

    /// Raises each element to `exponent`.
    ///
    /// The power is evaluated in `f64` and rounded back to `f32`. A negative
    /// base with a non-integer exponent yields NaN.
    #[must_use]
    pub fn array_pow(&self, exponent: f32) -> Self {
        let exponent = f64::from(exponent);
        self.map(|x| f64::from(x).powf(exponent) as f32)
    }

    /// Sums all elements in row-major order, accumulating in `f32`.
    #[must_use]
    pub fn sum(&self) -> f32 {
        self.data.iter().fold(0.0, |acc, &x| acc + x)
    }

    /// Transposes the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.rows * self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Square root of the summed squared differences, `sqrt(Σ (a - b)^2)`.
    ///
    /// Despite the name this is not a mean: the sum is not divided by the
    /// element count. Callers that compare against historical loss values
    /// depend on this exact formula.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] if the shapes differ.
    pub fn rms_error(&self, other: &Self) -> Result<f32> {
        let squared = self.minus(other)?.array_pow(2.0).sum();
        Ok(f64::from(squared).sqrt() as f32)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row},{col}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row},{col}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}

impl<const R: usize, const C: usize> From<[[f32; C]; R]> for Matrix {
    fn from(rows: [[f32; C]; R]) -> Self {
        Self {
            data: rows.iter().flatten().copied().collect(),
            rows: R,
            cols: C,
        }
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod tests_matrix_contract;
