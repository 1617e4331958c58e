//! Row partitioning for the threaded transposer.

use std::ops::Range;

/// Split `0..n` into `threads` contiguous half-open row ranges.
///
/// Each range gets `n / threads` rows and the first `n % threads` ranges get
/// one extra, so sizes differ by at most one. Ranges are ascending, disjoint,
/// and their union is exactly `0..n`.
///
/// Callers are expected to pass `1 <= threads`; `threads > n` produces
/// trailing empty ranges, which [`super::transpose_mt::transpose_multi`]
/// avoids by clamping first.
///
/// ```
/// use transpose::threaded::partition::partition_rows;
///
/// assert_eq!(partition_rows(10, 3), vec![0..4, 4..7, 7..10]);
/// ```
///
/// # Panics
///
/// Panics if `threads == 0`.
pub fn partition_rows(n: usize, threads: usize) -> Vec<Range<usize>> {
    assert!(threads > 0, "cannot partition rows across zero threads");

    let rows_per_thread = n / threads;
    let extra = n % threads;

    let mut current_row = 0;
    (0..threads)
        .map(|tid| {
            let start = current_row;
            let end = start + rows_per_thread + usize::from(tid < extra);
            current_row = end;
            start..end
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_split() {
        assert_eq!(partition_rows(4, 2), vec![0..2, 2..4]);
    }

    #[test]
    fn extra_rows_go_first() {
        assert_eq!(partition_rows(7, 3), vec![0..3, 3..5, 5..7]);
    }

    #[test]
    fn single_thread_takes_everything() {
        assert_eq!(partition_rows(25, 1), vec![0..25]);
    }

    #[test]
    fn more_threads_than_rows() {
        let parts = partition_rows(2, 4);
        assert_eq!(parts, vec![0..1, 1..2, 2..2, 2..2]);
    }

    #[test]
    #[should_panic(expected = "zero threads")]
    fn zero_threads_panics() {
        partition_rows(10, 0);
    }
}
