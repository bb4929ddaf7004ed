use anyhow::Result;
use common::{Notice, PriceSeries};
use tracing::{debug, warn};

use crate::cli::SeriesArgs;

/// Runs the form validation only. Fails with the same message the form
/// shows when the series would be rejected.
pub fn check(series: &SeriesArgs) -> Result<()> {
    let raw = series.raw()?;
    debug!("Checking {} bytes of input", raw.len());

    match raw.parse::<PriceSeries>() {
        Ok(parsed) => {
            println!("ok: {} values, last {}", parsed.len(), parsed.last().unwrap_or_default());
            Ok(())
        }
        Err(e) => {
            warn!("Series rejected: {}", e);
            anyhow::bail!("{} ({})", Notice::Validation, e)
        }
    }
}
