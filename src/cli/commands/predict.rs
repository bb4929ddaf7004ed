use std::path::{Path, PathBuf};

use anyhow::Result;
use common::{CycleOutcome, ModelKind, PredictionController};
use tracing::{debug, error, info, trace};

use crate::cli::SeriesArgs;
use crate::client::HttpPredictionService;
use crate::config::ClientConfig;
use crate::render::{HtmlChartRenderer, summary};
use crate::terminal::{TerminalControl, TerminalInput, TerminalNotifier};

pub async fn predict(
    series: &SeriesArgs,
    model: Option<ModelKind>,
    endpoint: Option<String>,
    output: Option<PathBuf>,
    config_path: Option<&Path>,
) -> Result<()> {
    trace!("Entering predict function");

    let config = ClientConfig::load(config_path)?.with_overrides(endpoint, model, output)?;
    info!("Requesting {} forecast from {}", config.model, config.endpoint);

    let input = TerminalInput::new(series.raw()?, config.model);
    let service = HttpPredictionService::new(config.endpoint.clone())?;
    let mut controller = PredictionController::new(HtmlChartRenderer::new(config.output.clone()));
    let mut control = TerminalControl::default();

    let outcome = controller
        .submit(&input, &mut control, &service, &TerminalNotifier)
        .await;
    debug!("Cycle finished, submit control {:?}", control.state());

    match outcome {
        CycleOutcome::Rendered { .. } => {
            if let Some(chart) = controller.renderer().last_chart() {
                print!("{}", summary(chart));
            }
            println!("Chart written to {}", controller.renderer().output().display());
            Ok(())
        }
        other => {
            error!("Prediction did not complete: {}", other);
            anyhow::bail!("{}", other)
        }
    }
}
