use rand::SeedableRng;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;

use super::Matrix;
use crate::error::{Result, TransposeError};

/// Seed used by the benchmark so every run sees the same input.
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_MIN: i32 = 0;
pub const DEFAULT_MAX: i32 = 100;

/// n×n matrix of uniform integers in `[0, 100]`.
///
/// The RNG is built fresh from `seed` on every call, so the same `(n, seed)`
/// always yields an identical matrix. `n == 0` gives an empty matrix.
pub fn generate_matrix(n: usize, seed: u64) -> Matrix {
    let dist = Uniform::new_inclusive(DEFAULT_MIN, DEFAULT_MAX);
    fill(n, dist, seed)
}

/// Like [`generate_matrix`] with caller-chosen inclusive bounds.
pub fn generate_matrix_in_range(n: usize, min: i32, max: i32, seed: u64) -> Result<Matrix> {
    if min > max {
        return Err(TransposeError::InvalidRange { min, max });
    }
    Ok(fill(n, Uniform::new_inclusive(min, max), seed))
}

fn fill(n: usize, dist: Uniform<i32>, seed: u64) -> Matrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let data: Vec<i32> = (0..n * n).map(|_| dist.sample(&mut rng)).collect();
    Matrix { n, data }
}
