//! Benchmark runner: single- vs multi-threaded in-place transpose.
//!
//! Prints a tab-separated report on stdout; diagnostics go to stderr.

use std::io;

use anyhow::Context;
use tracing::info;
use transpose::logging::{LogConfig, init_logging};
use transpose::sweep::{SweepConfig, write_report};

fn main() -> anyhow::Result<()> {
    init_logging(&LogConfig::default());

    let config = SweepConfig::default();
    info!(
        sizes = ?config.sizes,
        threads = ?config.thread_counts,
        available_parallelism = std::thread::available_parallelism().map_or(0, |p| p.get()),
        "starting transpose sweep"
    );

    let stdout = io::stdout();
    write_report(&mut stdout.lock(), &config).context("transpose sweep failed")?;

    Ok(())
}
