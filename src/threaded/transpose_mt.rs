//! Fork-join multi-threaded in-place transpose.

use std::ops::Range;
use std::thread;

use tracing::{debug, trace};

use super::partition::partition_rows;
use crate::error::{Result, TransposeError};
use crate::matrix::Matrix;
use crate::matrix::transpose::transpose_range_raw;

/// Matrix base pointer handed to every worker.
#[derive(Clone, Copy)]
struct SharedBase(*mut i32);

// SAFETY: workers only touch the swap pairs of their own row range, and the
// ranges produced by `partition_rows` are disjoint.
unsafe impl Send for SharedBase {}
unsafe impl Sync for SharedBase {}

impl SharedBase {
    #[inline]
    fn get(self) -> *mut i32 {
        self.0
    }
}

/// Transpose `m` in place across `num_threads` OS threads.
///
/// Rows are split with [`partition_rows`]; each partition gets a freshly
/// spawned worker running the range kernel, and every worker is joined
/// before this returns. No pool, no reuse between calls.
///
/// Thread count handling:
/// - `0` is rejected with [`TransposeError::InvalidThreadCount`].
/// - More threads than rows is clamped to one thread per row.
/// - An empty matrix spawns nothing.
///
/// If a worker cannot be spawned or panics, the workers that did start are
/// still joined and the first failure is returned. The matrix contents are
/// unspecified after a failure.
pub fn transpose_multi(m: &mut Matrix, num_threads: usize) -> Result<()> {
    if num_threads == 0 {
        return Err(TransposeError::InvalidThreadCount);
    }

    let n = m.dim();
    if n == 0 {
        debug!("empty matrix, nothing to transpose");
        return Ok(());
    }

    let effective_threads = choose_thread_count(n, num_threads);
    if effective_threads != num_threads {
        debug!(
            n,
            requested = num_threads,
            effective = effective_threads,
            "clamped thread count to row count"
        );
    }

    let partitions = partition_rows(n, effective_threads);
    let base = SharedBase(m.as_mut_ptr());

    fork_join(partitions, move |tid, rows| {
        trace!(worker = tid, start = rows.start, end = rows.end, "transposing rows");
        // SAFETY: `base` covers n*n elements, `rows` lies within 0..n,
        // and no other worker owns any row in `rows`.
        unsafe { transpose_range_raw(base.get(), n, rows.start, rows.end) }
    })
}

/// Run `work(worker, rows)` on one scoped thread per partition and join them all.
///
/// A spawn failure stops further spawning. Every worker that did start is
/// joined before returning, and the first failure wins.
fn fork_join<F>(partitions: Vec<Range<usize>>, work: F) -> Result<()>
where
    F: Fn(usize, Range<usize>) + Sync,
{
    let work = &work;

    thread::scope(|s| {
        let mut handles = Vec::with_capacity(partitions.len());
        let mut spawn_error = None;

        for (tid, rows) in partitions.into_iter().enumerate() {
            let spawned = thread::Builder::new()
                .name(format!("transpose-worker-{tid}"))
                .spawn_scoped(s, move || work(tid, rows));

            match spawned {
                Ok(handle) => handles.push((tid, handle)),
                Err(e) => {
                    spawn_error = Some(e);
                    break;
                }
            }
        }

        let mut result = match spawn_error {
            Some(e) => Err(TransposeError::Spawn(e)),
            None => Ok(()),
        };

        for (tid, handle) in handles {
            if handle.join().is_err() && result.is_ok() {
                result = Err(TransposeError::WorkerPanicked { worker: tid });
            }
        }

        result
    })
}

/// Never more workers than rows, so no partition is empty.
fn choose_thread_count(n: usize, max_threads: usize) -> usize {
    max_threads.min(n.max(1))
}
