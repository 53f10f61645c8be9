use crate::device_file_input::interface::{DeviceFileInput, FileInputEvent};
use crate::image_payload::ImagePayload;
use crate::library::logger::interface::Logger;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbImage};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

/// Stands in for the file picker and the drop target. Tests push events in
/// directly; the demo variant picks one synthesized image shortly after start.
pub struct DeviceFileInputFake {
    logger: Arc<dyn Logger + Send + Sync>,
    senders: Mutex<Vec<Sender<FileInputEvent>>>,
    reset_count: AtomicUsize,
    demo_pick: Option<ImagePayload>,
}

impl DeviceFileInputFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("file-input").with_namespace("fake"),
            senders: Mutex::new(Vec::new()),
            reset_count: AtomicUsize::new(0),
            demo_pick: None,
        }
    }

    /// Emits one synthesized JPEG pick about a second after subscription,
    /// so the binary runs the whole pipeline without real hardware.
    pub fn with_demo_pick(mut self) -> Self {
        self.demo_pick = Some(demo_payload());
        self
    }

    #[cfg(test)]
    pub fn emit(&self, event: FileInputEvent) {
        for sender in self.senders.lock().unwrap().iter() {
            let _ = sender.send(event.clone());
        }
    }

    #[cfg(test)]
    pub fn reset_count(&self) -> usize {
        self.reset_count.load(Ordering::SeqCst)
    }
}

impl DeviceFileInput for DeviceFileInputFake {
    fn events(&self) -> Receiver<FileInputEvent> {
        let (tx, rx) = channel();
        if let Some(payload) = self.demo_pick.clone() {
            let delayed = tx.clone();
            std::thread::spawn(move || {
                std::thread::sleep(std::time::Duration::from_secs(1));
                let _ = delayed.send(FileInputEvent::Picked(payload));
            });
        }
        self.senders.lock().unwrap().push(tx);
        rx
    }

    fn reset(&self) {
        let _ = self.logger.info("input control cleared");
        self.reset_count.fetch_add(1, Ordering::SeqCst);
    }
}

fn demo_payload() -> ImagePayload {
    let frame = DynamicImage::ImageRgb8(RgbImage::from_fn(96, 96, |x, y| {
        image::Rgb([180, (x * 2) as u8, (y * 2) as u8])
    }));
    let mut bytes = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut bytes, 92);
    // Encoding a freshly built RGB buffer to JPEG does not fail.
    if frame.write_with_encoder(encoder).is_err() {
        bytes.clear();
    }
    ImagePayload::new("demo-lesion.jpg", "image/jpeg", bytes)
}
