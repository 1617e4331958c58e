//! Square matrix storage and the single-threaded building blocks.
//!
//! Everything here runs on one thread. The multi-threaded transposer in
//! [`crate::threaded`] splits the same swap loop across row ranges.

pub mod check;
pub mod generate;
pub mod transpose;

use crate::error::{Result, TransposeError};

/// Square n×n matrix of `i32`, row-major in one contiguous buffer.
///
/// Element (i, j) lives at `data[i * n + j]`. Cloning gives an independent
/// working copy, which is how the benchmark keeps the reference intact.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Matrix {
    n: usize,
    data: Vec<i32>,
}

impl Matrix {
    /// n×n matrix filled with zeros.
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0; n * n],
        }
    }

    /// Wrap a row-major buffer. Fails unless `data.len() == n * n`.
    pub fn from_vec(n: usize, data: Vec<i32>) -> Result<Self> {
        if data.len() != n * n {
            return Err(TransposeError::DimensionMismatch {
                expected: n * n,
                actual: data.len(),
            });
        }
        Ok(Self { n, data })
    }

    /// Build from nested rows. Every row must have exactly `rows.len()` entries.
    ///
    /// ```
    /// use transpose::Matrix;
    ///
    /// let m = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
    /// assert_eq!(m.get(1, 0), 3);
    /// ```
    pub fn from_rows(rows: &[Vec<i32>]) -> Result<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for row in rows {
            if row.len() != n {
                return Err(TransposeError::NotSquare {
                    rows: n,
                    cols: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { n, data })
    }

    /// Side length n.
    #[inline]
    pub fn dim(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Element at row `i`, column `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> i32 {
        assert!(i < self.n && j < self.n, "({}, {}) out of bounds for {}x{}", i, j, self.n, self.n);
        self.data[i * self.n + j]
    }

    #[inline]
    pub fn row(&self, i: usize) -> &[i32] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.data
    }

    /// Raw base pointer, used by the range kernel shared across workers.
    #[inline]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut i32 {
        self.data.as_mut_ptr()
    }
}
