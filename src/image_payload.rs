use std::fmt;

/// A captured image on its way to the prediction service. Immutable once
/// validated; orientation normalization produces a new payload rather than
/// mutating this one.
#[derive(Clone, PartialEq)]
pub struct ImagePayload {
    pub filename: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImagePayload {
    pub fn new(filename: &str, mime_type: &str, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.to_string(),
            mime_type: mime_type.to_string(),
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

// Keeps model/event logs readable instead of dumping raw image bytes.
impl fmt::Debug for ImagePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImagePayload")
            .field("filename", &self.filename)
            .field("mime_type", &self.mime_type)
            .field("bytes", &format_args!("{} bytes", self.bytes.len()))
            .finish()
    }
}
