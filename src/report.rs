//! Text report for computed latency statistics.

use std::io::{self, Write};

use crate::stats::Statistics;

/// One labelled value of the report, always in microseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub label: String,
    pub value: f64,
}

impl ReportLine {
    fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

impl std::fmt::Display for ReportLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "  {:<30} {:>9.1} us", self.label, self.value)
    }
}

/// Numeric report lines in output order.
pub fn report_lines(stats: &Statistics) -> Vec<ReportLine> {
    let mut lines = Vec::new();

    if let Some(median) = stats.median {
        lines.push(ReportLine::new("Median", median));
    }
    lines.push(ReportLine::new("Average", stats.mean));
    lines.push(ReportLine::new("Best", stats.best));
    lines.push(ReportLine::new("Worst", stats.worst));

    for best in &stats.best_averages {
        let label = format!("Average (best {:2}% = {})", best.ratio, best.count);
        lines.push(ReportLine::new(label, best.mean));
    }
    for p in &stats.percentiles {
        lines.push(ReportLine::new(format!("{:2} Percentile", p.percentile), p.value));
    }

    lines
}

pub fn write_report<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "Samples: {}", stats.count)?;
    for line in report_lines(stats) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
