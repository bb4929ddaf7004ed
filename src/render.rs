use std::io;
use std::path::{Path, PathBuf};

use common::{ChartRenderer, ForecastChart};
use plotly::Plot;
use tracing::{debug, info, warn};

/// Renders forecasts as standalone Plotly HTML pages.
///
/// The live chart is the file at `output`; destroying it removes the file.
pub struct HtmlChartRenderer {
    output: PathBuf,
    last: Option<ForecastChart>,
}

impl HtmlChartRenderer {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            last: None,
        }
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// The chart currently on disk, if any
    pub fn last_chart(&self) -> Option<&ForecastChart> {
        self.last.as_ref()
    }
}

impl ChartRenderer for HtmlChartRenderer {
    type Chart = PathBuf;
    type Error = io::Error;

    fn render(&mut self, chart: &ForecastChart) -> io::Result<PathBuf> {
        let mut plot = Plot::new();
        plot.add_trace(chart.trace());
        plot.set_layout(chart.layout());

        std::fs::write(&self.output, plot.to_html())?;
        info!("Chart written to {}", self.output.display());

        self.last = Some(chart.clone());
        Ok(self.output.clone())
    }

    fn destroy(&mut self, chart: PathBuf) {
        self.last = None;
        match std::fs::remove_file(&chart) {
            Ok(()) => debug!("Removed previous chart {}", chart.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!("Could not remove previous chart {}: {}", chart.display(), e),
        }
    }
}

/// Plain text table of a forecast, one day per line.
pub fn summary(chart: &ForecastChart) -> String {
    let mut out = format!("{}\n", chart.series_label());
    for (label, value) in chart.labels().iter().zip(chart.values()) {
        out.push_str(&format!("{:>8}  {:>12.2}\n", label, value));
    }
    out
}
