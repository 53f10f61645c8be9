use crate::image_payload::ImagePayload;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraFacing {
    Front,
    Rear,
}

impl CameraFacing {
    pub fn toggled(self) -> Self {
        match self {
            CameraFacing::Front => CameraFacing::Rear,
            CameraFacing::Rear => CameraFacing::Front,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CameraFacing::Front => "front camera",
            CameraFacing::Rear => "rear camera",
        }
    }
}

/// Each variant carries its own user-facing message; the error text is what
/// ends up in the banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CameraError {
    #[error("Camera access was denied. Allow camera permissions and try again.")]
    PermissionDenied,
    #[error("No camera was found on this device.")]
    NotFound,
    #[error("The camera could not be started: {0}")]
    Acquisition(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraAcquired {
    pub camera_count: usize,
}

/// Live-camera seam. Implementations hold at most one active stream:
/// `acquire` stops every track of a previously held stream before requesting
/// a new one, and `release` stops every track before dropping the handle.
pub trait DeviceCamera: Send + Sync {
    fn acquire(&self, facing: CameraFacing) -> Result<CameraAcquired, CameraError>;
    fn release(&self) -> Result<(), CameraError>;
    fn capture_still(&self, jpeg_quality: u8) -> Result<ImagePayload, CameraError>;
}
