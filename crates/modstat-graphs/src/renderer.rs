//! Histogram rendering trait and the plotters bitmap implementation

use crate::types::HistogramSpec;
use plotters::prelude::*;
use std::path::Path;
use modstat_common::Result;

/// Renders histogram specs to image files
#[async_trait::async_trait]
pub trait HistogramRenderer: Send + Sync {
    /// Render `spec` to an image at `path`, replacing any existing file.
    async fn render_to_file(&self, spec: &HistogramSpec, path: &Path) -> Result<()>;

    /// Parse a color string (hex format) to RGBColor
    fn parse_color(&self, color_str: &str) -> RGBColor {
        if let Some(hex) = color_str.strip_prefix('#') {
            if hex.len() == 6 {
                if let (Ok(r), Ok(g), Ok(b)) = (
                    u8::from_str_radix(&hex[0..2], 16),
                    u8::from_str_radix(&hex[2..4], 16),
                    u8::from_str_radix(&hex[4..6], 16),
                ) {
                    return RGBColor(r, g, b);
                }
            }
        }
        // Default to black if parsing fails
        RGBColor(0, 0, 0)
    }
}

/// Draws step-outline histograms into PNG files with plotters' bitmap backend
#[derive(Debug, Default, Clone, Copy)]
pub struct BitmapHistogramRenderer;

impl BitmapHistogramRenderer {
    /// Create a new renderer
    pub fn new() -> Self {
        Self
    }

    fn draw(&self, spec: &HistogramSpec, path: &Path) -> Result<()> {
        let root = BitMapBackend::new(path, (spec.style.width, spec.style.height))
            .into_drawing_area();
        root.fill(&WHITE)?;

        let binning = spec.binning;
        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(80)
            .build_cartesian_2d(binning.start..binning.end, 0f64..spec.y_max())?;

        let x_formatter = |x: &f64| spec.ticks.format(*x);
        let y_formatter = |y: &f64| spec.scale.format(*y);
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(spec.tick_count)
            .x_label_formatter(&x_formatter)
            .y_label_formatter(&y_formatter)
            .x_desc(spec.x_label.as_str())
            .y_desc(spec.y_label.as_str())
            .draw()?;

        for series in &spec.series {
            let color = self.parse_color(&series.color);
            let outline = binning.step_outline(&spec.heights(series));

            chart
                .draw_series(LineSeries::new(outline, color.stroke_width(2)))?
                .label(series.label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }

        if spec.series.len() > 1 {
            chart
                .configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()?;
        }

        root.present()?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl HistogramRenderer for BitmapHistogramRenderer {
    async fn render_to_file(&self, spec: &HistogramSpec, path: &Path) -> Result<()> {
        self.draw(spec, path)?;
        tracing::info!("Rendered histogram to {}", path.display());
        Ok(())
    }
}
