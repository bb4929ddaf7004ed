//! Shared prediction-form types and the controller that drives one
//! submit cycle. Used by both the browser frontend and the command line
//! client, so nothing here touches the DOM or a network stack directly.

pub mod chart;
pub mod controller;
pub mod error;
mod model;
mod request;
mod response;
mod series;

pub use chart::{ForecastChart, day_labels};
pub use controller::{
    BusyGuard, ChartRenderer, CycleOutcome, InputSource, Notice, Notifier, PredictionController,
    PredictionService, SubmitControl, SubmitState,
};
pub use error::{FormError, ServiceError};
pub use model::ModelKind;
pub use request::{DATA_FIELD, MODEL_FIELD, PredictionRequest};
pub use response::{PredictionResponse, RawPredictionResponse};
pub use series::PriceSeries;

/// Endpoint of the hosted prediction service
pub const DEFAULT_ENDPOINT: &str = "https://stock-predictor-api.onrender.com/predict";
