use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Recurrent network variants the prediction service can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    #[default]
    Lstm,
    Rnn,
    Gru,
}

impl ModelKind {
    /// Every model, in the order the selector offers them
    pub const ALL: [ModelKind; 3] = [ModelKind::Lstm, ModelKind::Rnn, ModelKind::Gru];

    /// Identifier sent in the `model` form field
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Lstm => "lstm",
            ModelKind::Rnn => "rnn",
            ModelKind::Gru => "gru",
        }
    }

    /// Human readable name for selectors
    pub fn label(&self) -> &'static str {
        match self {
            ModelKind::Lstm => "LSTM",
            ModelKind::Rnn => "Simple RNN",
            ModelKind::Gru => "GRU",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ModelKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FormError::UnknownModel(wanted.to_string()))
    }
}
