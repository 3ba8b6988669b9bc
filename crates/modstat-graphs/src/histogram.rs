//! Binning, scaling and step outlines

use crate::types::{Binning, HistogramSeries, HistogramSpec, Scale};

impl Binning {
    /// Creates a binning of `bins` equal bins over `[start, end]`.
    pub fn new(bins: usize, start: f64, end: f64) -> Self {
        Self { bins, start, end }
    }

    /// Width of a single bin.
    pub fn width(&self) -> f64 {
        if self.bins == 0 {
            0.0
        } else {
            (self.end - self.start) / self.bins as f64
        }
    }

    /// Index of the bin holding `sample`, or `None` when it falls outside the range.
    pub fn index_of(&self, sample: f64) -> Option<usize> {
        if self.bins == 0 || !(self.start..=self.end).contains(&sample) {
            return None;
        }
        let index = ((sample - self.start) / self.width()) as usize;
        Some(index.min(self.bins - 1))
    }

    /// Number of samples per bin. Out-of-range samples are dropped.
    pub fn counts(&self, samples: &[f64]) -> Vec<u32> {
        let mut counts = vec![0u32; self.bins];
        for index in samples.iter().filter_map(|&s| self.index_of(s)) {
            counts[index] += 1;
        }
        counts
    }

    /// Points tracing the outline of bars with the given heights, starting and
    /// ending on the x axis.
    pub fn step_outline(&self, heights: &[f64]) -> Vec<(f64, f64)> {
        let width = self.width();
        let mut points = Vec::with_capacity(heights.len() * 2 + 2);
        points.push((self.start, 0.0));
        for (i, &height) in heights.iter().enumerate() {
            let left = self.start + width * i as f64;
            points.push((left, height));
            points.push((left + width, height));
        }
        points.push((self.start + width * heights.len() as f64, 0.0));
        points
    }
}

/// Converts bin counts to heights on the given scale.
///
/// A density of an empty histogram is all zeros rather than NaN.
pub fn scale_counts(counts: &[u32], scale: Scale, bin_width: f64) -> Vec<f64> {
    match scale {
        Scale::Count => counts.iter().map(|&c| f64::from(c)).collect(),
        Scale::Density => {
            let total: u32 = counts.iter().sum();
            if total == 0 || bin_width <= 0.0 {
                return vec![0.0; counts.len()];
            }
            let norm = f64::from(total) * bin_width;
            counts.iter().map(|&c| f64::from(c) / norm).collect()
        }
    }
}

impl HistogramSpec {
    /// Bar heights of one series under this spec's binning and scale.
    pub fn heights(&self, series: &HistogramSeries) -> Vec<f64> {
        let counts = self.binning.counts(&series.samples);
        scale_counts(&counts, self.scale, self.binning.width())
    }

    /// Upper bound of the y axis: the tallest bar plus headroom, or 1 for an empty chart.
    pub fn y_max(&self) -> f64 {
        let tallest = self
            .series
            .iter()
            .flat_map(|series| self.heights(series))
            .fold(0.0, f64::max);
        if tallest > 0.0 {
            tallest * 1.05
        } else {
            1.0
        }
    }
}
