//! The submit, validate, request and render cycle behind the prediction form.
//!
//! Everything the cycle touches outside its own state is a capability trait,
//! so the same controller drives the browser form and the command line
//! client, and runs in tests without either.

use std::fmt;

use async_trait::async_trait;
use tracing::{debug, error, info, instrument, warn};

use crate::chart::ForecastChart;
use crate::error::{FormError, ServiceError};
use crate::model::ModelKind;
use crate::request::PredictionRequest;
use crate::response::PredictionResponse;

/// Where the raw form values come from.
pub trait InputSource {
    /// Comma separated prices as typed
    fn raw_series(&self) -> String;
    /// Current value of the model selector
    fn selected_model(&self) -> String;
}

/// Visual state of the submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Ready,
    Busy,
}

impl SubmitState {
    pub fn label(&self) -> &'static str {
        match self {
            SubmitState::Ready => "Predict",
            SubmitState::Busy => "Predicting...",
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, SubmitState::Busy)
    }
}

/// The button that starts a cycle.
pub trait SubmitControl {
    fn set_state(&mut self, state: SubmitState);
}

impl<T: SubmitControl + ?Sized> SubmitControl for &mut T {
    fn set_state(&mut self, state: SubmitState) {
        (**self).set_state(state)
    }
}

/// Holds the submit control busy until dropped.
///
/// Every exit from a cycle, early return included, puts the control back
/// into [`SubmitState::Ready`].
pub struct BusyGuard<C: SubmitControl> {
    control: C,
}

impl<C: SubmitControl> BusyGuard<C> {
    pub fn engage(mut control: C) -> Self {
        control.set_state(SubmitState::Busy);
        Self { control }
    }
}

impl<C: SubmitControl> Drop for BusyGuard<C> {
    fn drop(&mut self) {
        self.control.set_state(SubmitState::Ready);
    }
}

/// Message shown to the user at the end of a failed cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Validation,
    Service(String),
    Transport,
}

impl Notice {
    pub const VALIDATION_MESSAGE: &'static str =
        "Please enter exactly 60 valid comma-separated numbers.";
    pub const TRANSPORT_MESSAGE: &'static str = "An error occurred while fetching predictions.";

    pub fn message(&self) -> &str {
        match self {
            Notice::Validation => Self::VALIDATION_MESSAGE,
            Notice::Service(message) => message,
            Notice::Transport => Self::TRANSPORT_MESSAGE,
        }
    }
}

impl From<&FormError> for Notice {
    fn from(_: &FormError) -> Self {
        Notice::Validation
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Surface that shows notices to the user.
pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

/// Drawing surface for forecasts.
pub trait ChartRenderer {
    /// Handle to a live chart
    type Chart;
    type Error: fmt::Display;

    fn render(&mut self, chart: &ForecastChart) -> Result<Self::Chart, Self::Error>;
    fn destroy(&mut self, chart: Self::Chart);
}

/// Remote prediction endpoint.
///
/// Futures are not required to be `Send`: the browser implementation holds
/// JS values across the await.
#[async_trait(?Send)]
pub trait PredictionService {
    async fn predict(&self, request: &PredictionRequest)
        -> Result<PredictionResponse, ServiceError>;
}

/// How a cycle ended.
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    /// Input failed validation, nothing was sent
    Rejected(FormError),
    /// The service answered with an error message
    ServiceError(String),
    /// Transport, decoding or chart construction failed
    Failed(String),
    /// A new chart replaced the previous one
    Rendered { points: usize },
}

impl CycleOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, CycleOutcome::Rendered { .. })
    }
}

impl fmt::Display for CycleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleOutcome::Rejected(e) => write!(f, "input rejected: {}", e),
            CycleOutcome::ServiceError(e) => write!(f, "service error: {}", e),
            CycleOutcome::Failed(e) => write!(f, "request failed: {}", e),
            CycleOutcome::Rendered { points } => write!(f, "rendered {} predictions", points),
        }
    }
}

/// Owns the chart surface and the handle to whatever chart it shows.
pub struct PredictionController<R: ChartRenderer> {
    renderer: R,
    current: Option<R::Chart>,
}

impl<R: ChartRenderer> PredictionController<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            current: None,
        }
    }

    pub fn has_chart(&self) -> bool {
        self.current.is_some()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Runs one full cycle.
    ///
    /// The submit control is busy from the first line until the returned
    /// future completes, whatever the outcome.
    #[instrument(skip_all)]
    pub async fn submit<I, C, S, N>(
        &mut self,
        input: &I,
        control: C,
        service: &S,
        notifier: &N,
    ) -> CycleOutcome
    where
        I: InputSource + ?Sized,
        C: SubmitControl,
        S: PredictionService + ?Sized,
        N: Notifier + ?Sized,
    {
        let _busy = BusyGuard::engage(control);

        let request = match PredictionRequest::from_input(input) {
            Ok(request) => request,
            Err(e) => return self.reject(e, notifier),
        };

        let model = request.model;
        let result = service.predict(&request).await;
        self.complete(model, result, notifier)
    }

    /// Reports a validation failure. No request is made.
    pub fn reject<N: Notifier + ?Sized>(&self, error: FormError, notifier: &N) -> CycleOutcome {
        warn!("Prediction input rejected: {}", error);
        notifier.notify(&Notice::from(&error));
        CycleOutcome::Rejected(error)
    }

    /// Applies the service result to the chart.
    ///
    /// An error reply leaves the current chart alone. A successful reply
    /// destroys the current chart before the new one is rendered.
    pub fn complete<N: Notifier + ?Sized>(
        &mut self,
        model: ModelKind,
        result: Result<PredictionResponse, ServiceError>,
        notifier: &N,
    ) -> CycleOutcome {
        let predictions = match result {
            Ok(PredictionResponse::Predictions { predictions }) => predictions,
            Ok(PredictionResponse::Error { error: message }) => {
                warn!("Prediction service reported: {}", message);
                notifier.notify(&Notice::Service(message.clone()));
                return CycleOutcome::ServiceError(message);
            }
            Err(e) => {
                error!("Error: {}", e);
                notifier.notify(&Notice::Transport);
                return CycleOutcome::Failed(e.to_string());
            }
        };

        let chart = ForecastChart::new(model, predictions);
        debug!("Rendering {} predictions for {}", chart.len(), model);

        if let Some(previous) = self.current.take() {
            debug!("Destroying previous chart");
            self.renderer.destroy(previous);
        }

        match self.renderer.render(&chart) {
            Ok(handle) => {
                self.current = Some(handle);
                info!("Rendered forecast of {} days using {}", chart.len(), model);
                CycleOutcome::Rendered { points: chart.len() }
            }
            Err(e) => {
                error!("Error: chart construction failed: {}", e);
                notifier.notify(&Notice::Transport);
                CycleOutcome::Failed(e.to_string())
            }
        }
    }
}
