use crate::config::Config;
use crate::image_payload::ImagePayload;
use thiserror::Error;

/// The error text is the user-facing banner message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("The file is too large. Please choose an image smaller than 10 MB.")]
    TooLarge { size: u64, limit: u64 },
    #[error("Please choose a valid image file (JPG, JPEG or PNG).")]
    UnsupportedType { mime_type: String },
}

/// Checks a candidate against the size cap and the MIME allow-list before any
/// decoding happens. Exactly at the cap passes; only strictly larger fails.
pub fn validate(config: &Config, payload: &ImagePayload) -> Result<(), ValidationError> {
    if payload.size() > config.max_upload_bytes {
        return Err(ValidationError::TooLarge {
            size: payload.size(),
            limit: config.max_upload_bytes,
        });
    }

    if !config
        .allowed_mime_types
        .iter()
        .any(|allowed| allowed == &payload.mime_type)
    {
        return Err(ValidationError::UnsupportedType {
            mime_type: payload.mime_type.clone(),
        });
    }

    Ok(())
}
