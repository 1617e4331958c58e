use super::Matrix;

/// `true` iff `transposed[j][i] == original[i][j]` for every `i, j`.
///
/// Matrices of different size are never transposes of each other, so a
/// dimension mismatch returns `false`.
pub fn is_transpose_of(original: &Matrix, transposed: &Matrix) -> bool {
    original.dim() == transposed.dim() && first_mismatch(original, transposed).is_none()
}

/// First `(i, j)` where `transposed[j][i] != original[i][j]`, scanning row by row.
///
/// Returns `None` for a correct transpose and also when the sizes differ;
/// callers wanting to tell those apart should compare `dim()` first.
pub fn first_mismatch(original: &Matrix, transposed: &Matrix) -> Option<(usize, usize)> {
    let n = original.dim();
    if transposed.dim() != n {
        return None;
    }
    let a = original.as_slice();
    let t = transposed.as_slice();
    for i in 0..n {
        for j in 0..n {
            if a[i * n + j] != t[j * n + i] {
                return Some((i, j));
            }
        }
    }
    None
}
