use crate::device_camera::interface::{
    CameraAcquired, CameraError, CameraFacing, DeviceCamera,
};
use crate::device_camera::stream_slot::{MediaStream, StreamSlot};
use crate::image_payload::ImagePayload;
use crate::library::logger::interface::Logger;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbImage};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

pub struct FakeTrack {
    stopped: AtomicBool,
}

impl FakeTrack {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            stopped: AtomicBool::new(false),
        })
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

pub struct FakeStream {
    tracks: Vec<Arc<FakeTrack>>,
}

impl MediaStream for FakeStream {
    fn stop_all_tracks(&self) {
        for track in &self.tracks {
            track.stopped.store(true, Ordering::SeqCst);
        }
    }
}

/// Stands in for the platform media-capture API. Captured stills are real
/// JPEG bytes so the rest of the pipeline decodes them like any other image.
pub struct DeviceCameraFake {
    logger: Arc<dyn Logger + Send + Sync>,
    slot: StreamSlot<FakeStream>,
    camera_count: usize,
    fail_acquire_with: Mutex<Option<CameraError>>,
}

impl DeviceCameraFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("camera").with_namespace("fake"),
            slot: StreamSlot::new(),
            camera_count: 2,
            fail_acquire_with: Mutex::new(None),
        }
    }

    #[cfg(test)]
    pub fn with_camera_count(mut self, camera_count: usize) -> Self {
        self.camera_count = camera_count;
        self
    }

    /// Makes the next `acquire` fail, for driving the device-error paths.
    #[cfg(test)]
    pub fn fail_next_acquire(&self, error: CameraError) {
        *self.fail_acquire_with.lock().unwrap() = Some(error);
    }

    #[cfg(test)]
    pub fn has_active_stream(&self) -> bool {
        self.slot.is_active()
    }

    /// Handles onto the live stream's tracks so tests can observe stops
    /// after a later acquire or release.
    #[cfg(test)]
    pub fn active_tracks(&self) -> Vec<Arc<FakeTrack>> {
        self.slot
            .with_active(|stream| stream.tracks.clone())
            .unwrap_or_default()
    }

    fn synth_still(&self, jpeg_quality: u8) -> Result<Vec<u8>, CameraError> {
        let frame = DynamicImage::ImageRgb8(RgbImage::from_fn(64, 64, |x, y| {
            image::Rgb([(x * 4) as u8, (y * 4) as u8, 128])
        }));
        let mut bytes = Vec::new();
        let encoder = JpegEncoder::new_with_quality(&mut bytes, jpeg_quality);
        frame
            .write_with_encoder(encoder)
            .map_err(|e| CameraError::Acquisition(e.to_string()))?;
        Ok(bytes)
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn acquire(&self, facing: CameraFacing) -> Result<CameraAcquired, CameraError> {
        if let Some(error) = self.fail_acquire_with.lock().unwrap().take() {
            let _ = self.logger.error(&format!("acquire failed: {}", error));
            return Err(error);
        }
        if self.camera_count == 0 {
            return Err(CameraError::NotFound);
        }

        let _ = self.logger.info(&format!("acquiring {}", facing.label()));
        self.slot.replace(FakeStream {
            tracks: vec![FakeTrack::new(), FakeTrack::new()],
        });
        Ok(CameraAcquired {
            camera_count: self.camera_count,
        })
    }

    fn release(&self) -> Result<(), CameraError> {
        let _ = self.logger.info("releasing stream");
        self.slot.clear();
        Ok(())
    }

    fn capture_still(&self, jpeg_quality: u8) -> Result<ImagePayload, CameraError> {
        if !self.slot.is_active() {
            return Err(CameraError::Acquisition("no active stream".to_string()));
        }
        let bytes = self.synth_still(jpeg_quality)?;
        let _ = self
            .logger
            .info(&format!("captured still ({} bytes)", bytes.len()));
        Ok(ImagePayload::new("camera-capture.jpg", "image/jpeg", bytes))
    }
}
