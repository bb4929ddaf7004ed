use plotly::common::{Line, LineShape, Mode, Title};
use plotly::layout::{Axis, RangeMode};
use plotly::{Layout, Scatter};

use crate::model::ModelKind;

/// Colour of the forecast line
pub const LINE_COLOR: &str = "blue";
/// Spline smoothing applied to the forecast line
pub const LINE_SMOOTHING: f64 = 0.1;

/// Everything needed to draw one forecast: ordinal day labels on the x-axis,
/// predicted prices on the y-axis and a legend entry naming the model.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastChart {
    labels: Vec<String>,
    values: Vec<f64>,
    series_label: String,
}

/// `Day 1` .. `Day n`
pub fn day_labels(n: usize) -> Vec<String> {
    (1..=n).map(|day| format!("Day {}", day)).collect()
}

impl ForecastChart {
    pub fn new(model: ModelKind, predictions: Vec<f64>) -> Self {
        Self {
            labels: day_labels(predictions.len()),
            values: predictions,
            series_label: format!("Predicted Price ({})", model),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn series_label(&self) -> &str {
        &self.series_label
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The single line series of the chart
    pub fn trace(&self) -> Box<Scatter<String, f64>> {
        Scatter::new(self.labels.clone(), self.values.clone())
            .mode(Mode::Lines)
            .name(&self.series_label)
            .line(
                Line::new()
                    .color(LINE_COLOR)
                    .width(2.0)
                    .shape(LineShape::Spline)
                    .smoothing(LINE_SMOOTHING),
            )
    }

    /// Layout with a y-axis that follows the data instead of starting at zero
    pub fn layout(&self) -> Layout {
        Layout::new()
            .title(Title::with_text(&self.series_label))
            .x_axis(Axis::new().title(Title::with_text("Day")))
            .y_axis(
                Axis::new()
                    .title(Title::with_text("Price"))
                    .range_mode(RangeMode::Normal),
            )
            .height(400)
    }
}
