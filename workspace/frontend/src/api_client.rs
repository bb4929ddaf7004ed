use async_trait::async_trait;
use common::{PredictionRequest, PredictionResponse, PredictionService, ServiceError};
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use crate::settings;

/// Posts the prediction form with `fetch`.
pub struct GlooPredictionService {
    endpoint: String,
}

impl GlooPredictionService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn from_settings() -> Self {
        Self::new(settings::get_settings().predict_endpoint)
    }
}

fn js_error(e: JsValue) -> ServiceError {
    ServiceError::Transport(format!("{:?}", e))
}

/// Multipart body with the `data` and `model` fields
fn form_data(request: &PredictionRequest) -> Result<FormData, ServiceError> {
    let form = FormData::new().map_err(js_error)?;
    for (name, value) in request.form_fields() {
        form.append_with_str(name, &value).map_err(js_error)?;
    }
    Ok(form)
}

#[async_trait(?Send)]
impl PredictionService for GlooPredictionService {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, ServiceError> {
        log::debug!("POST request to: {}", self.endpoint);

        let body = form_data(request)?;
        let response = Request::post(&self.endpoint)
            .body(body)
            .map_err(|e| {
                let error_msg = format!("Failed to build request: {}", e);
                log::error!("POST {} - {}", self.endpoint, error_msg);
                ServiceError::Transport(error_msg)
            })?
            .send()
            .await
            .map_err(|e| {
                let error_msg = format!("Request failed: {}", e);
                log::error!("POST {} - {}", self.endpoint, error_msg);
                ServiceError::Transport(error_msg)
            })?;

        // Error replies come back as 4xx/5xx with a JSON body, so the status
        // is logged but the body is decoded either way.
        if !response.ok() {
            log::warn!("POST {} - Non-OK response: {}", self.endpoint, response.status());
        }

        log::trace!("POST {} - Response received, parsing JSON", self.endpoint);
        let text = response.text().await.map_err(|e| {
            let error_msg = format!("Failed to read response: {}", e);
            log::error!("POST {} - {}", self.endpoint, error_msg);
            ServiceError::Transport(error_msg)
        })?;

        let decoded = PredictionResponse::from_json(&text).map_err(|e| {
            log::error!("POST {} - {}", self.endpoint, e);
            e
        })?;

        log::info!("POST {} - Success", self.endpoint);
        Ok(decoded)
    }
}
