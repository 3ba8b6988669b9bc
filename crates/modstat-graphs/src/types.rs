//! Histogram description types

use chrono::{Duration, NaiveDate};
use modstat_config::GraphsConfig;

/// Fixed-width bins over `[start, end]`.
///
/// Every bin is half-open except the last one, which also holds `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binning {
    /// Number of bins
    pub bins: usize,
    /// Left edge of the first bin
    pub start: f64,
    /// Right edge of the last bin
    pub end: f64,
}

/// How bin heights are expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    /// Raw number of samples per bin
    Count,
    /// Fraction of all samples per unit of x, so the outline encloses an area of 1
    Density,
}

impl Scale {
    /// Formats a y-axis value for this scale.
    pub fn format(&self, value: f64) -> String {
        match self {
            Scale::Count => format!("{}", value.round() as i64),
            Scale::Density => format!("{value:.3}"),
        }
    }
}

/// How x-axis tick values are labelled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickLabels {
    /// Plain hour numbers
    Hours,
    /// Days offset from `origin`, shown as `MM-DD`
    Dates {
        /// Calendar day at x = 0
        origin: NaiveDate,
    },
}

impl TickLabels {
    /// Formats an x-axis value.
    pub fn format(&self, value: f64) -> String {
        let whole = value.round() as i64;
        match self {
            TickLabels::Hours => whole.to_string(),
            TickLabels::Dates { origin } => (*origin + Duration::days(whole))
                .format("%m-%d")
                .to_string(),
        }
    }
}

/// One outline drawn on the chart
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSeries {
    /// Legend label
    pub label: String,
    /// Sample positions on the x axis
    pub samples: Vec<f64>,
    /// Outline color as `#RRGGBB`
    pub color: String,
}

/// Image size and series colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartStyle {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Color of the primary series
    pub primary_color: String,
    /// Color of the baseline series
    pub baseline_color: String,
}

impl From<&GraphsConfig> for ChartStyle {
    fn from(config: &GraphsConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            primary_color: config.primary_color.clone(),
            baseline_color: config.baseline_color.clone(),
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::from(&GraphsConfig::default())
    }
}

/// Everything needed to draw one histogram image
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSpec {
    /// Bin layout shared by all series
    pub binning: Binning,
    /// Height scale shared by all series
    pub scale: Scale,
    /// X-axis tick labelling
    pub ticks: TickLabels,
    /// Number of x-axis labels to aim for
    pub tick_count: usize,
    /// X-axis description
    pub x_label: String,
    /// Y-axis description
    pub y_label: String,
    /// Outlines, drawn in order
    pub series: Vec<HistogramSeries>,
    /// Image size and colors
    pub style: ChartStyle,
}
