use crate::config::Config;
use crate::device_display::interface::{
    CameraOverlayView, PreviewView, ProgressView, RankedBarView, ResultsView, ScaleBarView,
    Screen, ScreenBody, StepView,
};
use crate::prediction_client::interface::PredictionResult;
use crate::scan_station::core::{Model, State};

/// Pure projection of the model onto a drawable screen. Everything the
/// renderer shows is decided here, where it can be asserted on directly.
pub fn screen(config: &Config, model: &Model) -> Screen {
    Screen {
        body: body(config, &model.state),
        preview: preview(&model.state),
        banner: model.banner.as_ref().map(|b| b.message.clone()),
    }
}

fn preview(state: &State) -> Option<PreviewView> {
    let payload = match state {
        State::Normalizing { preview, .. }
        | State::Uploading { preview, .. }
        | State::Preview { preview }
        | State::Results { preview, .. } => preview,
        _ => return None,
    };
    Some(PreviewView {
        filename: payload.filename.clone(),
        size_bytes: payload.bytes.len(),
    })
}

fn body(config: &Config, state: &State) -> ScreenBody {
    match state {
        State::Idle | State::Preview { .. } => ScreenBody::Idle,
        State::CameraStarting { facing } => ScreenBody::CameraOverlay(CameraOverlayView {
            facing_label: facing.label().to_string(),
            can_switch: false,
            starting: true,
        }),
        State::CameraLive {
            facing,
            camera_count,
        } => ScreenBody::CameraOverlay(CameraOverlayView {
            facing_label: facing.label().to_string(),
            can_switch: *camera_count > 1,
            starting: false,
        }),
        State::CameraSwitching { facing } => ScreenBody::CameraOverlay(CameraOverlayView {
            facing_label: facing.label().to_string(),
            can_switch: false,
            starting: true,
        }),
        State::Normalizing { .. } => ScreenBody::Progress(progress_view(config, 1)),
        State::Uploading { steps_done, .. } => {
            ScreenBody::Progress(progress_view(config, *steps_done))
        }
        State::Results { result, .. } => ScreenBody::Results(results_view(result)),
    }
}

pub fn progress_view(config: &Config, steps_done: usize) -> ProgressView {
    ProgressView {
        steps: config
            .progress_steps
            .iter()
            .enumerate()
            .map(|(i, label)| StepView {
                label: label.clone(),
                active: i < steps_done,
            })
            .collect(),
    }
}

/// Server order is display order; nothing here sorts or filters.
pub fn results_view(result: &PredictionResult) -> ResultsView {
    ResultsView {
        top_disease_label: format_label(&result.disease.top_prediction.label),
        top_disease_confidence: format_confidence(result.disease.top_prediction.confidence),
        top_k: result
            .disease
            .top_k
            .iter()
            .enumerate()
            .map(|(i, prediction)| RankedBarView {
                rank: i + 1,
                label: format_label(&prediction.label),
                confidence_text: format_confidence(prediction.confidence),
                fill_percent: prediction.confidence as f32,
            })
            .collect(),
        fitzpatrick_badge: result.fitzpatrick.top_prediction.scale.to_string(),
        top_fitzpatrick_label: format!(
            "Fitzpatrick Scale {}",
            result.fitzpatrick.top_prediction.scale
        ),
        top_fitzpatrick_confidence: format_confidence(result.fitzpatrick.top_prediction.confidence),
        all_scales: result
            .fitzpatrick
            .all_scales
            .iter()
            .map(|prediction| ScaleBarView {
                label: format!("Scale {}", prediction.scale),
                confidence_text: format_confidence(prediction.confidence),
                fill_percent: prediction.confidence as f32,
            })
            .collect(),
    }
}

/// Upper-cases the first character of each space-delimited word, ASCII only.
/// Non-alphabetic leading characters pass through unchanged.
pub fn format_label(label: &str) -> String {
    label
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders like the server value: `87.5` becomes `87.5%`, `2` becomes `2%`.
fn format_confidence(confidence: f64) -> String {
    format!("{}%", confidence)
}
