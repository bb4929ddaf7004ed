use std::path::Path;

use common::{InputSource, ModelKind, Notice, Notifier, SubmitControl, SubmitState};
use tracing::{debug, info, warn};

/// Form values collected from the command line.
#[derive(Debug, Clone)]
pub struct TerminalInput {
    raw: String,
    model: ModelKind,
}

impl TerminalInput {
    pub fn new(raw: impl Into<String>, model: ModelKind) -> Self {
        Self {
            raw: raw.into(),
            model,
        }
    }
}

impl InputSource for TerminalInput {
    fn raw_series(&self) -> String {
        self.raw.clone()
    }

    fn selected_model(&self) -> String {
        self.model.to_string()
    }
}

/// Reads a series file. Non-empty lines are trimmed and joined with commas,
/// so a single CSV line and one value per line both work.
pub fn read_series_file(path: &Path) -> std::io::Result<String> {
    let contents = std::fs::read_to_string(path)?;
    Ok(join_lines(&contents))
}

pub fn join_lines(contents: &str) -> String {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

/// Stand-in for the submit button: reports state changes through the log.
#[derive(Debug, Default)]
pub struct TerminalControl {
    state: SubmitState,
}

impl TerminalControl {
    pub fn state(&self) -> SubmitState {
        self.state
    }
}

impl SubmitControl for TerminalControl {
    fn set_state(&mut self, state: SubmitState) {
        self.state = state;
        match state {
            SubmitState::Busy => info!("{}", state.label()),
            SubmitState::Ready => debug!("Ready: {}", state.label()),
        }
    }
}

/// Prints notices to stderr.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: &Notice) {
        warn!(?notice, "Notifying user");
        eprintln!("{}", notice);
    }
}
