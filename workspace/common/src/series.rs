use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::{FormError, Result};

/// The trailing window of closing prices the models are trained on.
///
/// Parsed from comma separated text. Every value is finite and there are
/// always exactly [`PriceSeries::WINDOW`] of them.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    values: Vec<f64>,
}

impl PriceSeries {
    /// Number of past prices a prediction needs
    pub const WINDOW: usize = 60;

    /// Builds a series from already parsed values.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if let Some(position) = values.iter().position(|v| !v.is_finite()) {
            return Err(FormError::InvalidNumber {
                position,
                token: values[position].to_string(),
            });
        }
        if values.len() != Self::WINDOW {
            return Err(FormError::WrongLength {
                expected: Self::WINDOW,
                found: values.len(),
            });
        }
        Ok(Self { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Last observed price, used by the CLI summary
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }
}

impl FromStr for PriceSeries {
    type Err = FormError;

    fn from_str(raw: &str) -> Result<Self> {
        trace!("Parsing price series from {} bytes of input", raw.len());

        let tokens: Vec<&str> = raw.split(',').map(str::trim).collect();
        if tokens.len() != Self::WINDOW {
            debug!("Rejecting series with {} segments", tokens.len());
            return Err(FormError::WrongLength {
                expected: Self::WINDOW,
                found: tokens.len(),
            });
        }

        let mut values = Vec::with_capacity(tokens.len());
        for (position, token) in tokens.into_iter().enumerate() {
            match token.parse::<f64>() {
                Ok(value) if value.is_finite() => values.push(value),
                _ => {
                    debug!("Rejecting series: segment {} is {:?}", position, token);
                    return Err(FormError::InvalidNumber {
                        position,
                        token: token.to_string(),
                    });
                }
            }
        }

        Ok(Self { values })
    }
}

impl fmt::Display for PriceSeries {
    /// Comma joined with no padding. `f64` display is the shortest text that
    /// reads back to the same value, so the output parses back unchanged.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}
