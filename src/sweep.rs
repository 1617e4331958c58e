//! The benchmark sweep: sizes × thread counts, timed and checked.
//!
//! `main` only hands stdout to [`write_report`], so the sweep and the report
//! layout are testable on small sizes.

use std::io::Write;
use std::time::Instant;

use tracing::{info, warn};

use crate::error::Result;
use crate::matrix::Matrix;
use crate::matrix::check::{first_mismatch, is_transpose_of};
use crate::matrix::generate::{DEFAULT_MAX, DEFAULT_MIN, DEFAULT_SEED, generate_matrix_in_range};
use crate::matrix::transpose::transpose_in_place;
use crate::threaded::transpose_mt::transpose_multi;

pub const DEFAULT_SIZES: [usize; 4] = [100, 1000, 10000, 25000];
pub const DEFAULT_THREAD_COUNTS: [usize; 7] = [1, 4, 8, 16, 32, 64, 128];

/// What to run. `Default` is the fixed sweep the binary uses.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub sizes: Vec<usize>,
    /// Thread counts to report. `1` is always measured as the
    /// single-threaded baseline, whether listed or not.
    pub thread_counts: Vec<usize>,
    pub seed: u64,
    pub min: i32,
    pub max: i32,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            thread_counts: DEFAULT_THREAD_COUNTS.to_vec(),
            seed: DEFAULT_SEED,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }
}

/// One line of the report.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchRecord {
    pub size: usize,
    pub threads: usize,
    pub seconds: f64,
    /// Single-threaded time divided by this run's time.
    pub speedup: f64,
    pub correct: bool,
}

impl BenchRecord {
    /// Tab-separated row matching [`format_header`].
    pub fn format_row(&self) -> String {
        format!(
            "{}\t\t{}\t{:.6}\t\t{}",
            self.size,
            self.threads,
            self.seconds,
            if self.correct { "Yes" } else { "No" }
        )
    }
}

pub fn format_header() -> &'static str {
    "MatrixSize\tThreads\tTime(sec)\tCorrect"
}

/// Benchmark one matrix size.
///
/// Generates the reference matrix once, times a single-threaded transpose of
/// a copy, then a multi-threaded transpose of a fresh copy for every thread
/// count above one. Records come back in that order.
pub fn run_size(n: usize, config: &SweepConfig) -> Result<Vec<BenchRecord>> {
    let orig = generate_matrix_in_range(n, config.min, config.max, config.seed)?;
    let mut records = Vec::with_capacity(config.thread_counts.len().max(1));

    let mut single = orig.clone();
    let start = Instant::now();
    transpose_in_place(&mut single);
    let baseline = start.elapsed().as_secs_f64();
    // the baseline is the reference point, 1.0 by definition
    records.push(record(n, 1, baseline, 1.0, verify(&orig, &single, 1)));
    drop(single);

    for &threads in config.thread_counts.iter().filter(|&&t| t != 1) {
        let mut multi = orig.clone();
        let start = Instant::now();
        transpose_multi(&mut multi, threads)?;
        let seconds = start.elapsed().as_secs_f64();
        let speedup = speedup(baseline, seconds);
        records.push(record(n, threads, seconds, speedup, verify(&orig, &multi, threads)));
    }

    Ok(records)
}

/// Write the full tab-separated report: header, then one row per run with a
/// blank line closing each size group. Flushed after every group so long
/// sweeps show progress.
pub fn write_report<W: Write>(out: &mut W, config: &SweepConfig) -> Result<()> {
    writeln!(out, "{}", format_header())?;

    for &n in &config.sizes {
        for rec in run_size(n, config)? {
            writeln!(out, "{}", rec.format_row())?;
        }
        writeln!(out)?;
        out.flush()?;
    }

    Ok(())
}

/// `baseline / seconds`; a run too fast for the clock to see is infinitely faster.
fn speedup(baseline: f64, seconds: f64) -> f64 {
    if seconds > 0.0 {
        baseline / seconds
    } else {
        f64::INFINITY
    }
}

fn record(size: usize, threads: usize, seconds: f64, speedup: f64, correct: bool) -> BenchRecord {
    info!(size, threads, seconds, speedup, correct, "transpose timed");
    BenchRecord {
        size,
        threads,
        seconds,
        speedup,
        correct,
    }
}

fn verify(orig: &Matrix, transposed: &Matrix, threads: usize) -> bool {
    let ok = is_transpose_of(orig, transposed);
    if !ok {
        match first_mismatch(orig, transposed) {
            Some((i, j)) => warn!(size = orig.dim(), threads, i, j, "transpose mismatch"),
            None => warn!(size = orig.dim(), threads, "transpose has wrong dimensions"),
        }
    }
    ok
}
