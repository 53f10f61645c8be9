use std::error::Error;

/// Everything a display needs to draw one moment of the session. Built by the
/// pure view layer; implementations only draw, they never decide.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub body: ScreenBody,
    pub preview: Option<PreviewView>,
    pub banner: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenBody {
    Idle,
    CameraOverlay(CameraOverlayView),
    Progress(ProgressView),
    Results(ResultsView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewView {
    pub filename: String,
    pub size_bytes: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CameraOverlayView {
    pub facing_label: String,
    pub can_switch: bool,
    pub starting: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressView {
    pub steps: Vec<StepView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepView {
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub top_disease_label: String,
    pub top_disease_confidence: String,
    pub top_k: Vec<RankedBarView>,
    pub fitzpatrick_badge: String,
    pub top_fitzpatrick_label: String,
    pub top_fitzpatrick_confidence: String,
    pub all_scales: Vec<ScaleBarView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedBarView {
    pub rank: usize,
    pub label: String,
    pub confidence_text: String,
    pub fill_percent: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScaleBarView {
    pub label: String,
    pub confidence_text: String,
    pub fill_percent: f32,
}

pub trait DeviceDisplay: Send + Sync {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;
    fn show(&mut self, screen: &Screen) -> Result<(), Box<dyn Error + Send + Sync>>;
}
