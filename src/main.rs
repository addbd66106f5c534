//! Latency Analyzer
//!
//! Reads a file of latency samples (one value in microseconds per line) and
//! prints the sample count, median, average, best/worst sample, best-N%
//! averages and percentile samples.

use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

mod input;
mod report;
mod stats;

use stats::{compute_statistics, SampleSet};

extern crate jemallocator;

#[global_allocator]
static GLOBAL: jemallocator::Jemalloc = jemallocator::Jemalloc;

/// Exit status when the input holds no samples.
const NO_SAMPLES_EXIT: u8 = 255;

/// Analyzer configuration.
#[derive(Parser, Debug, Clone)]
#[command(name = "analyze")]
#[command(about = "Compute latency statistics from a file of samples (one value in us per line)")]
pub struct Config {
    /// Sample file, one latency in microseconds per line
    pub input: PathBuf,
}

fn main() -> Result<ExitCode> {
    env_logger::init();

    let config = Config::parse();

    let samples = input::load_samples(&config.input)?;
    tracing::info!("loaded {} samples from {}", samples.len(), config.input.display());

    let Some(samples) = SampleSet::new(samples) else {
        println!("ERROR: no samples available!");
        return Ok(ExitCode::from(NO_SAMPLES_EXIT));
    };

    let stats = compute_statistics(&samples);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::write_report(&mut out, &stats)?;
    out.flush()?;

    Ok(ExitCode::SUCCESS)
}
