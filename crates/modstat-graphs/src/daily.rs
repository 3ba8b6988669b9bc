//! Per-day histograms over a trailing window.

use crate::types::{Binning, ChartStyle, HistogramSeries, HistogramSpec, Scale, TickLabels};
use chrono::{DateTime, Utc};

/// X-axis description for day charts.
pub const DAY_X_LABEL: &str = "Date (UTC)";
/// Y-axis description for day charts.
pub const DAY_Y_LABEL: &str = "Logged actions";

const SECONDS_PER_DAY: f64 = 86_400.0;

impl HistogramSpec {
    /// One bin per day over the `days` days following `start` on a count scale.
    pub fn daily(
        label: &str,
        timestamps: &[DateTime<Utc>],
        start: DateTime<Utc>,
        days: u32,
        style: ChartStyle,
    ) -> Self {
        let bins = days.max(1) as usize;

        let samples = timestamps
            .iter()
            .map(|ts| (*ts - start).num_seconds() as f64 / SECONDS_PER_DAY)
            .collect();

        Self {
            binning: Binning::new(bins, 0.0, bins as f64),
            scale: Scale::Count,
            ticks: TickLabels::Dates {
                origin: start.date_naive(),
            },
            tick_count: bins + 1,
            x_label: DAY_X_LABEL.to_string(),
            y_label: DAY_Y_LABEL.to_string(),
            series: vec![HistogramSeries {
                label: label.to_string(),
                samples,
                color: style.primary_color.clone(),
            }],
            style,
        }
    }
}
