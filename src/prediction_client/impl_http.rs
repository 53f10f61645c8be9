use crate::image_payload::ImagePayload;
use crate::library::logger::interface::Logger;
use crate::prediction_client::interface::{PredictError, PredictionClient, PredictionResult};
use reqwest::blocking::multipart::{Form, Part};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Posts the payload as one multipart request to `{base}/predict`.
/// Fire-once: no retry, platform-default timeout.
pub struct PredictionClientHttp {
    client: reqwest::blocking::Client,
    predict_url: String,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl PredictionClientHttp {
    pub fn new(base_url: &str, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            predict_url: format!("{}/predict", base_url.trim_end_matches('/')),
            logger: logger.with_namespace("prediction").with_namespace("http"),
        }
    }
}

impl PredictionClient for PredictionClientHttp {
    fn predict(&self, payload: &ImagePayload) -> Result<PredictionResult, PredictError> {
        let _ = self.logger.info(&format!(
            "posting {} ({} bytes) to {}",
            payload.filename,
            payload.size(),
            self.predict_url
        ));

        let part = Part::bytes(payload.bytes.clone())
            .file_name(payload.filename.clone())
            .mime_str(&payload.mime_type)
            .map_err(|e| PredictError::Transport(e.to_string()))?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(&self.predict_url)
            .multipart(form)
            .send()
            .map_err(|e| PredictError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return response.json::<PredictionResult>().map_err(|e| {
                let _ = self
                    .logger
                    .error(&format!("unparseable success body: {}", e));
                PredictError::Failed
            });
        }

        let _ = self.logger.error(&format!("predict returned {}", status));
        match response.json::<ErrorBody>() {
            Ok(body) => Err(PredictError::Rejected(body.detail)),
            Err(_) => Err(PredictError::Failed),
        }
    }
}
