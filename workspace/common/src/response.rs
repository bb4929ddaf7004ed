use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// Body returned by the prediction service.
///
/// The service answers with either an `error` message or a `predictions`
/// list. Decoding goes through [`RawPredictionResponse`] so the two shapes
/// are told apart explicitly instead of by probing fields afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PredictionResponse {
    Error { error: String },
    Predictions { predictions: Vec<f64> },
}

/// Wire shape before validation
#[derive(Debug, Deserialize)]
pub struct RawPredictionResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub predictions: Option<Vec<f64>>,
}

impl RawPredictionResponse {
    pub fn validate(self) -> Result<PredictionResponse, String> {
        // A blank error message is not an error report.
        match (self.error.filter(|e| !e.is_empty()), self.predictions) {
            (Some(error), _) => Ok(PredictionResponse::Error { error }),
            (None, Some(predictions)) => Ok(PredictionResponse::Predictions { predictions }),
            (None, None) => Err("response carries neither `error` nor `predictions`".to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for PredictionResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawPredictionResponse::deserialize(deserializer)?
            .validate()
            .map_err(de::Error::custom)
    }
}

impl PredictionResponse {
    /// Decodes a JSON body, mapping schema failures to [`ServiceError::Decode`].
    pub fn from_json(body: &str) -> Result<Self, ServiceError> {
        serde_json::from_str(body).map_err(|e| ServiceError::Decode(e.to_string()))
    }
}
