use std::ops::Range;

use super::Matrix;

/// In-place transpose: swap `m[i][j]` with `m[j][i]` for every `i < j`.
///
/// n(n-1)/2 swaps, no allocation. This is the single-threaded baseline the
/// threaded version is timed against.
///
/// # Example
///
/// ```
/// use transpose::Matrix;
/// use transpose::matrix::transpose::transpose_in_place;
///
/// let mut m = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
/// transpose_in_place(&mut m);
/// assert_eq!(m.as_slice(), &[1, 3, 2, 4]);
/// ```
pub fn transpose_in_place(m: &mut Matrix) {
    let n = m.dim();
    let data = m.as_mut_slice();
    for i in 0..n {
        for j in i + 1..n {
            data.swap(i * n + j, j * n + i);
        }
    }
}

/// Transpose only the upper-triangle cells whose row falls in `rows`.
///
/// The inner loop always runs `j` over `i+1..n`, so each swap pair
/// {(i, j), (j, i)} belongs to exactly one row `i`. Calling this over ranges
/// that cover `0..n` once is a full transpose.
///
/// # Panics
///
/// Panics unless `rows.start <= rows.end <= n`.
pub fn transpose_range(m: &mut Matrix, rows: Range<usize>) {
    let n = m.dim();
    assert!(
        rows.start <= rows.end && rows.end <= n,
        "row range {}..{} invalid for {}x{} matrix",
        rows.start,
        rows.end,
        n,
        n
    );
    // SAFETY: range checked above and we hold the only reference to `m`.
    unsafe { transpose_range_raw(m.as_mut_ptr(), n, rows.start, rows.end) }
}

/// Raw-pointer form of [`transpose_range`], shared by the worker threads.
///
/// # Safety
///
/// - `base` must point to `n * n` initialized, writable `i32`s.
/// - `start <= end <= n`.
/// - No other thread may touch the swap pairs of rows `start..end` while
///   this runs. Disjoint row ranges satisfy this.
#[inline]
pub(crate) unsafe fn transpose_range_raw(base: *mut i32, n: usize, start: usize, end: usize) {
    for i in start..end {
        for j in i + 1..n {
            unsafe { std::ptr::swap(base.add(i * n + j), base.add(j * n + i)) };
        }
    }
}

/// Copy `src` (rows × cols, row-major) into `dst` as its cols × rows transpose.
///
/// Reads and writes separate buffers, so it shares nothing with the swap
/// kernels above. Tests and benches use it as the known-good answer.
///
/// ```
/// use transpose::matrix::transpose::transpose_into;
///
/// let mut dst = vec![0; 6];
/// transpose_into(&[1, 2, 3, 4, 5, 6], &mut dst, 2, 3);
/// assert_eq!(dst, [1, 4, 2, 5, 3, 6]);
/// ```
///
/// # Panics
///
/// Panics if either slice is not `rows * cols` long.
pub fn transpose_into<T: Copy>(src: &[T], dst: &mut [T], rows: usize, cols: usize) {
    assert_eq!(src.len(), rows * cols, "src: expected {}x{}={} elements", rows, cols, rows * cols);
    assert_eq!(dst.len(), rows * cols, "dst: expected {}x{}={} elements", cols, rows, rows * cols);

    for i in 0..rows {
        for j in 0..cols {
            dst[j * rows + i] = src[i * cols + j];
        }
    }
}
