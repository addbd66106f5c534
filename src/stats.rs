//! Statistics computation for latency samples.

/// Ratios (percent) for which the average of the best samples is reported.
pub const BEST_RATIOS: [usize; 5] = [1, 10, 50, 90, 99];

/// Percentiles for which the sample at that rank is reported.
pub const PERCENTILES: [usize; 6] = [1, 5, 10, 90, 95, 99];

/// Latency samples in microseconds, sorted ascending.
#[derive(Debug, Clone)]
pub struct SampleSet {
    sorted: Vec<f64>,
}

impl SampleSet {
    /// Sorts the samples. Returns `None` when there are no samples.
    pub fn new(mut samples: Vec<f64>) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        samples.sort_unstable_by(f64::total_cmp);
        Some(Self { sorted: samples })
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Sample at `index` in ascending order.
    pub fn sample(&self, index: usize) -> Option<f64> {
        self.sorted.get(index).copied()
    }

    pub fn median(&self) -> Option<f64> {
        self.sample(self.len() / 2)
    }

    pub fn best(&self) -> f64 {
        self.sorted[0]
    }

    pub fn worst(&self) -> f64 {
        self.sorted[self.len() - 1]
    }

    pub fn mean(&self) -> f64 {
        mean(&self.sorted)
    }

    /// Mean of the smallest `count * ratio / 100` samples.
    ///
    /// Returns `None` when that count is zero or covers the whole set.
    pub fn best_average(&self, ratio: usize) -> Option<BestAverage> {
        let count = self.len() * ratio / 100;
        if count == 0 || count >= self.len() {
            tracing::debug!("skipping best {}% average (count = {})", ratio, count);
            return None;
        }
        Some(BestAverage {
            ratio,
            count,
            mean: mean(&self.sorted[..count]),
        })
    }

    /// Sample at index `count * percentile / 100`, if in range.
    pub fn percentile(&self, percentile: usize) -> Option<PercentileSample> {
        let index = self.len() * percentile / 100;
        let value = self.sample(index);
        if value.is_none() {
            tracing::debug!("skipping {} percentile (index = {})", percentile, index);
        }
        value.map(|value| PercentileSample { percentile, value })
    }
}

fn mean(values: &[f64]) -> f64 {
    let mut total = 0.0_f64;
    for value in values {
        total += *value;
    }
    total / values.len() as f64
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestAverage {
    pub ratio: usize,
    pub count: usize,
    pub mean: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentileSample {
    pub percentile: usize,
    pub value: f64,
}

pub struct Statistics {
    pub count: usize,
    pub median: Option<f64>,
    pub mean: f64,
    pub best: f64,
    pub worst: f64,
    pub best_averages: Vec<BestAverage>,
    pub percentiles: Vec<PercentileSample>,
}

pub fn compute_statistics(samples: &SampleSet) -> Statistics {
    let best_averages = BEST_RATIOS
        .iter()
        .filter_map(|&ratio| samples.best_average(ratio))
        .collect();
    let percentiles = PERCENTILES
        .iter()
        .filter_map(|&p| samples.percentile(p))
        .collect();

    Statistics {
        count: samples.len(),
        median: samples.median(),
        mean: samples.mean(),
        best: samples.best(),
        worst: samples.worst(),
        best_averages,
        percentiles,
    }
}
