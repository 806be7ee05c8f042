//! Raw big-endian matrix encoding.
//!
//! Layout:
//! ```text
//! [rows * cols x f32, big-endian IEEE-754, row-major]
//! ```
//!
//! There is no header: the shape travels out of band, so a reader must
//! construct a matrix of the right shape before calling [`Matrix::load`].

use crate::error::Result;
use crate::primitives::Matrix;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Size of one encoded element in bytes.
pub const BYTES_PER_ELEMENT: usize = 4;

impl Matrix {
    /// Encodes the matrix as big-endian `f32` values in row-major order.
    #[must_use]
    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.as_slice().iter().flat_map(|v| v.to_be_bytes()).collect()
    }

    /// Writes the raw encoding of the matrix to `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Io`](crate::MatrixError::Io) if the write fails.
    pub fn save<W: Write>(&self, mut writer: W) -> Result<()> {
        let bytes = self.to_be_bytes();
        log::debug!(
            "saving {}x{} matrix ({} bytes)",
            self.n_rows(),
            self.n_cols(),
            bytes.len()
        );
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(())
    }

    /// Overwrites the matrix with `rows * cols` values read from `reader`.
    ///
    /// Exactly `len() * 4` bytes are consumed. The matrix is only modified
    /// once the whole buffer has been read.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Io`](crate::MatrixError::Io) if the read fails
    /// or the stream ends early (`ErrorKind::UnexpectedEof`).
    pub fn load<R: Read>(&mut self, mut reader: R) -> Result<()> {
        let mut bytes = vec![0u8; self.len() * BYTES_PER_ELEMENT];
        reader.read_exact(&mut bytes)?;
        log::debug!(
            "loaded {}x{} matrix ({} bytes)",
            self.n_rows(),
            self.n_cols(),
            bytes.len()
        );

        for (dst, chunk) in self
            .as_mut_slice()
            .iter_mut()
            .zip(bytes.chunks_exact(BYTES_PER_ELEMENT))
        {
            *dst = f32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Ok(())
    }

    /// Reads a `rows x cols` matrix from `reader`.
    ///
    /// # Errors
    ///
    /// See [`Matrix::load`].
    pub fn read_from<R: Read>(rows: usize, cols: usize, reader: R) -> Result<Self> {
        let mut m = Self::new(rows, cols);
        m.load(reader)?;
        Ok(m)
    }

    /// Saves the raw encoding to a file, replacing any existing content.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Io`](crate::MatrixError::Io) if the file can't
    /// be created or written.
    pub fn save_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        log::debug!("writing matrix to {}", path.display());
        self.save(BufWriter::new(File::create(path)?))
    }

    /// Loads the raw encoding from a file into this matrix.
    ///
    /// Trailing bytes beyond `len() * 4` are ignored, which allows several
    /// matrices to share one file when read through [`Matrix::load`].
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Io`](crate::MatrixError::Io) if the file can't
    /// be opened or is too short.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        log::debug!("reading matrix from {}", path.display());
        self.load(BufReader::new(File::open(path)?))
    }
}
