//! Errors surfaced by matrix construction and the multi-threaded transposer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransposeError {
    #[error("thread count must be at least 1")]
    InvalidThreadCount,

    #[error("invalid value range: min {min} > max {max}")]
    InvalidRange { min: i32, max: i32 },

    #[error("dimension mismatch: expected {expected} elements, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("matrix is not square: {rows} rows, row of {cols} columns")]
    NotSquare { rows: usize, cols: usize },

    #[error("failed to spawn worker thread: {0}")]
    Spawn(std::io::Error),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("worker {worker} panicked")]
    WorkerPanicked { worker: usize },
}

pub type Result<T> = std::result::Result<T, TransposeError>;
