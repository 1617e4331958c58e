//! Parallel in-place transpose of square matrices, built from scratch.
//!
//! The interesting part is how the work is split. An in-place transpose
//! swaps (i, j) with (j, i) for every i < j, and each of those pairs belongs
//! to row i. Hand each thread a contiguous range of rows and the threads
//! touch disjoint pairs, so there's nothing to lock.
//!
//! ## Usage
//!
//! ```
//! use transpose::{Matrix, transpose};
//!
//! let mut m = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
//! transpose(&mut m);
//!
//! assert_eq!(m.as_slice(), &[1, 3, 2, 4]);
//! ```
//!
//! For large matrices, spread the rows over several threads:
//!
//! ```
//! use transpose::{generate_matrix, is_transpose_of, transpose_parallel};
//!
//! let orig = generate_matrix(512, 42);
//! let mut m = orig.clone();
//! transpose_parallel(&mut m, 4).unwrap();
//!
//! assert!(is_transpose_of(&orig, &m));
//! ```
//!
//! ## What's inside
//!
//! - Seeded matrix generator, so every run sees the same input
//! - Single-threaded and row-range swap kernels
//! - Balanced row partitioning and a fork-join threaded transpose
//! - Correctness checker and the benchmark sweep behind the binary

pub mod error;
pub mod logging;
pub mod matrix;
pub mod sweep;
pub mod threaded;

pub use error::{Result, TransposeError};
pub use matrix::Matrix;
pub use matrix::check::is_transpose_of;
pub use matrix::generate::{DEFAULT_SEED, generate_matrix};
pub use threaded::partition::partition_rows;

/// Transpose `m` in place on the calling thread.
pub fn transpose(m: &mut Matrix) {
    matrix::transpose::transpose_in_place(m);
}

/// Same as [`transpose`] but splits the rows across `num_threads` threads.
///
/// One thread runs the single-threaded kernel directly without spawning.
/// See [`threaded::transpose_mt::transpose_multi`] for how zero threads and
/// more threads than rows are handled.
pub fn transpose_parallel(m: &mut Matrix, num_threads: usize) -> Result<()> {
    if num_threads == 1 {
        transpose(m);
        return Ok(());
    }
    threaded::transpose_mt::transpose_multi(m, num_threads)
}
