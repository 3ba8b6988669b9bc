//! Hour-of-day histograms comparing a primary series with the public baseline.

use crate::types::{Binning, ChartStyle, HistogramSeries, HistogramSpec, Scale, TickLabels};

/// X-axis description for hour charts.
pub const HOUR_X_LABEL: &str = "Hour (UTC)";
/// Y-axis description for hour charts.
pub const HOUR_Y_LABEL: &str = "Fraction of all messages";

impl HistogramSpec {
    /// 24 unit bins over `[0, 24)` on a density scale.
    ///
    /// `primary` is drawn in the primary color and `baseline`, when present,
    /// in the baseline color.
    pub fn hourly(
        primary: (&str, &[u8]),
        baseline: Option<(&str, &[u8])>,
        style: ChartStyle,
    ) -> Self {
        let mut series = vec![hour_series(primary.0, primary.1, &style.primary_color)];
        if let Some((label, hours)) = baseline {
            series.push(hour_series(label, hours, &style.baseline_color));
        }

        Self {
            binning: Binning::new(24, 0.0, 24.0),
            scale: Scale::Density,
            ticks: TickLabels::Hours,
            tick_count: 25,
            x_label: HOUR_X_LABEL.to_string(),
            y_label: HOUR_Y_LABEL.to_string(),
            series,
            style,
        }
    }
}

fn hour_series(label: &str, hours: &[u8], color: &str) -> HistogramSeries {
    HistogramSeries {
        label: label.to_string(),
        samples: hours.iter().map(|&h| f64::from(h)).collect(),
        color: color.to_string(),
    }
}
