use crate::image_payload::ImagePayload;

#[derive(Debug, Clone)]
pub enum FileInputEvent {
    /// One file chosen through the system picker.
    Picked(ImagePayload),
    /// Files dropped onto the intake area. Only the first one is taken.
    Dropped(Vec<ImagePayload>),
}

pub trait DeviceFileInput: Send + Sync {
    fn events(&self) -> std::sync::mpsc::Receiver<FileInputEvent>;
    /// Clears the input control so the same rejected file cannot silently
    /// resubmit on the next pick.
    fn reset(&self);
}
