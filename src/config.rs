use crate::device_camera::interface::CameraFacing;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub tick_rate: Duration,
    pub max_upload_bytes: u64,
    pub allowed_mime_types: Vec<String>,
    pub predict_base_url: String,
    pub reencode_quality: u8,
    pub progress_steps: Vec<String>,
    pub banner_timeout: Duration,
    pub default_facing: CameraFacing,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(500),
            max_upload_bytes: 10 * 1024 * 1024,
            allowed_mime_types: vec![
                "image/jpeg".to_string(),
                "image/jpg".to_string(),
                "image/png".to_string(),
            ],
            predict_base_url: "http://localhost:8000".to_string(),
            reencode_quality: 92,
            progress_steps: vec![
                "Uploading image".to_string(),
                "Analyzing skin".to_string(),
                "Classifying disease".to_string(),
                "Preparing results".to_string(),
            ],
            banner_timeout: Duration::from_secs(10),
            default_facing: CameraFacing::Rear,
            logger_timezone: mountain_standard_time(),
        }
    }
}

impl Config {
    /// How many ticks a banner stays up before the tick handler clears it.
    pub fn banner_ticks(&self) -> u32 {
        (self.banner_timeout.as_millis() / self.tick_rate.as_millis().max(1)).max(1) as u32
    }
}

fn mountain_standard_time() -> chrono::FixedOffset {
    chrono::FixedOffset::west_opt(7 * 3600).unwrap()
}
