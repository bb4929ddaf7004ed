use async_trait::async_trait;
use common::{PredictionRequest, PredictionResponse, PredictionService, ServiceError};
use reqwest::multipart::Form;
use tracing::{debug, error, info};

/// Posts prediction forms to the remote service over HTTP.
///
/// One attempt per request: no timeout, no retry. The body is decoded
/// whatever the status code, since the service reports bad input as a
/// 4xx/5xx carrying an `error` field.
pub struct HttpPredictionService {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpPredictionService {
    pub fn new(endpoint: impl Into<String>) -> reqwest::Result<Self> {
        Ok(Self {
            client: reqwest::Client::builder().build()?,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait(?Send)]
impl PredictionService for HttpPredictionService {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, ServiceError> {
        debug!("POST request to: {}", self.endpoint);

        let form = request
            .form_fields()
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value));

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!("POST {} - Request failed: {}", self.endpoint, e);
                ServiceError::Transport(e.to_string())
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("POST {} - Failed to read body: {}", self.endpoint, e);
            ServiceError::Transport(e.to_string())
        })?;

        debug!("POST {} - {} with {} bytes", self.endpoint, status, body.len());
        let decoded = PredictionResponse::from_json(&body)?;
        info!("POST {} - Response decoded", self.endpoint);
        Ok(decoded)
    }
}
