use crate::error::{InferenceError, Result};
use crate::models::GeneratedImage;

/// Decode a response body into an image.
///
/// The inference API signals success purely through the status code, so a
/// 200 body is not guaranteed to be pixel data. A body that does not parse
/// as an image comes back as `DecodeError` carrying the parser's reason;
/// callers treat that as a normal outcome, not a crash.
pub fn decode_image(bytes: &[u8]) -> Result<GeneratedImage> {
    if bytes.is_empty() {
        return Err(InferenceError::DecodeError(
            "Response body is empty".to_string(),
        ));
    }

    let format = image::guess_format(bytes)
        .map_err(|e| InferenceError::DecodeError(format!("Unrecognized image data: {}", e)))?;

    let image = image::load_from_memory(bytes).map_err(|e| {
        InferenceError::DecodeError(format!("Failed to decode {:?} image: {}", format, e))
    })?;

    Ok(GeneratedImage::new(image, format))
}
