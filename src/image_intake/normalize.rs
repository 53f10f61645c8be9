use crate::image_payload::ImagePayload;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::DynamicImage;
use std::error::Error;

/// Decode-redraw-reencode cycle. Mobile capture pipelines embed rotation
/// metadata that naive decoding ignores; re-encoding from raw pixels discards
/// it while keeping the rendered orientation. Best-effort: any failure passes
/// the original payload through untouched.
pub fn normalize_orientation(payload: &ImagePayload, jpeg_quality: u8) -> ImagePayload {
    match reencode(payload, jpeg_quality) {
        Ok(normalized) => normalized,
        Err(_) => payload.clone(),
    }
}

pub fn reencode(
    payload: &ImagePayload,
    jpeg_quality: u8,
) -> Result<ImagePayload, Box<dyn Error + Send + Sync>> {
    let decoded = image::load_from_memory(&payload.bytes)?;
    let mut bytes = Vec::new();

    match payload.mime_type.as_str() {
        "image/jpeg" | "image/jpg" => {
            // JPEG carries no alpha channel.
            let flattened = DynamicImage::ImageRgb8(decoded.to_rgb8());
            let encoder = JpegEncoder::new_with_quality(&mut bytes, jpeg_quality);
            flattened.write_with_encoder(encoder)?;
        }
        "image/png" => {
            let encoder = PngEncoder::new(&mut bytes);
            decoded.write_with_encoder(encoder)?;
        }
        other => return Err(format!("no encoder for {}", other).into()),
    }

    Ok(ImagePayload {
        filename: payload.filename.clone(),
        mime_type: payload.mime_type.clone(),
        bytes,
    })
}
