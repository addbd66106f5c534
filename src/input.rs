//! Sample file loading.
//!
//! The input is plain text with one latency (microseconds) per line.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read the whole sample file and parse it into samples, in file order.
pub fn load_samples(path: &Path) -> Result<Vec<f64>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read sample file {}", path.display()))?;
    tracing::debug!("read {} bytes from {}", text.len(), path.display());

    parse_samples(&text)
}

/// Parse one sample per line. Blank lines are ignored; any other line that
/// is not a finite number fails the whole parse.
pub fn parse_samples(text: &str) -> Result<Vec<f64>> {
    let mut samples = Vec::new();
    let mut blank = 0usize;

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            blank += 1;
            continue;
        }
        let sample = parse_sample(line)
            .with_context(|| format!("line {}: invalid sample '{}'", i + 1, line))?;
        samples.push(sample);
    }

    tracing::debug!("parsed {} samples ({} blank lines ignored)", samples.len(), blank);
    Ok(samples)
}

fn parse_sample(text: &str) -> Result<f64> {
    let value: f64 = text.parse()?;
    if !value.is_finite() {
        anyhow::bail!("sample is not a finite number");
    }
    Ok(value)
}
