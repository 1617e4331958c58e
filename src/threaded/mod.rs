//! Multi-threaded transpose.
//!
//! Rows are split into contiguous ranges, one per worker, and every worker
//! runs the single-threaded swap loop over its own range. Swap pairs never
//! cross ranges, so no locking is needed.
//!
//! - `partition`: balanced row ranges
//! - `transpose_mt`: fork-join driver over those ranges

pub mod partition;
pub mod transpose_mt;
