use crate::image_payload::ImagePayload;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Response shape of the remote model. Confidences arrive as already-scaled
/// percentages (0-100) and both lists arrive pre-ordered; the client neither
/// normalizes nor re-sorts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub disease: DiseaseResult,
    pub fitzpatrick: FitzpatrickResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseResult {
    pub top_prediction: DiseasePrediction,
    pub top_k: Vec<DiseasePrediction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseasePrediction {
    pub label: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitzpatrickResult {
    pub top_prediction: ScalePrediction,
    pub all_scales: Vec<ScalePrediction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalePrediction {
    pub scale: i32,
    pub confidence: f64,
}

/// The error text is the user-facing banner message. A server-supplied
/// `detail` is surfaced verbatim; everything else gets a generic line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    #[error("{0}")]
    Rejected(String),
    #[error("The analysis failed. Please try again.")]
    Failed,
    #[error("Could not reach the prediction service: {0}")]
    Transport(String),
}

pub trait PredictionClient: Send + Sync {
    fn predict(&self, payload: &ImagePayload) -> Result<PredictionResult, PredictError>;
}
