use crate::image_payload::ImagePayload;
use crate::library::logger::interface::Logger;
use crate::prediction_client::interface::{
    DiseasePrediction, DiseaseResult, FitzpatrickResult, PredictError, PredictionClient,
    PredictionResult, ScalePrediction,
};
use rand::Rng;
use std::sync::Arc;

const LABELS: [&str; 8] = [
    "acne vulgaris",
    "rosacea",
    "psoriasis",
    "eczema",
    "basal cell carcinoma",
    "seborrheic dermatitis",
    "melanoma",
    "folliculitis",
];

/// Synthesizes a plausible result without a network. Useful for wiring the
/// station against no backend at all.
pub struct PredictionClientFake {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl PredictionClientFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("prediction").with_namespace("fake"),
        }
    }
}

impl PredictionClient for PredictionClientFake {
    fn predict(&self, payload: &ImagePayload) -> Result<PredictionResult, PredictError> {
        let _ = self
            .logger
            .info(&format!("faking prediction for {}", payload.filename));

        let mut rng = rand::rng();
        let start = rng.random_range(0..LABELS.len());

        let mut remaining = 100.0_f64;
        let mut top_k = Vec::new();
        for i in 0..3 {
            let confidence = if i == 2 {
                remaining
            } else {
                (remaining * rng.random_range(0.5..0.9) * 10.0).round() / 10.0
            };
            remaining -= confidence;
            top_k.push(DiseasePrediction {
                label: LABELS[(start + i) % LABELS.len()].to_string(),
                confidence: (confidence * 10.0).round() / 10.0,
            });
        }

        let top_scale = rng.random_range(1..=6);
        let all_scales: Vec<ScalePrediction> = (1..=6)
            .map(|scale| ScalePrediction {
                scale,
                confidence: if scale == top_scale { 60.0 } else { 8.0 },
            })
            .collect();

        Ok(PredictionResult {
            disease: DiseaseResult {
                top_prediction: top_k[0].clone(),
                top_k,
            },
            fitzpatrick: FitzpatrickResult {
                top_prediction: ScalePrediction {
                    scale: top_scale,
                    confidence: 60.0,
                },
                all_scales,
            },
        })
    }
}
