use tracing::debug;

use crate::controller::InputSource;
use crate::error::Result;
use crate::model::ModelKind;
use crate::series::PriceSeries;

/// Multipart field carrying the comma joined prices
pub const DATA_FIELD: &str = "data";
/// Multipart field carrying the model identifier
pub const MODEL_FIELD: &str = "model";

/// A validated prediction request, ready to be posted.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRequest {
    pub data: PriceSeries,
    pub model: ModelKind,
}

impl PredictionRequest {
    pub fn new(data: PriceSeries, model: ModelKind) -> Self {
        Self { data, model }
    }

    /// Reads and validates the form. The series is checked before the model.
    pub fn from_input<I: InputSource + ?Sized>(input: &I) -> Result<Self> {
        let data: PriceSeries = input.raw_series().parse()?;
        let model: ModelKind = input.selected_model().parse()?;
        debug!("Prepared prediction request for model {}", model);
        Ok(Self { data, model })
    }

    /// Form body as name/value pairs, in the order they are appended
    pub fn form_fields(&self) -> [(&'static str, String); 2] {
        [
            (DATA_FIELD, self.data.to_string()),
            (MODEL_FIELD, self.model.to_string()),
        ]
    }
}
