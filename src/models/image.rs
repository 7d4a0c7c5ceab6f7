use crate::error::{InferenceError, Result};
use base64::{engine::general_purpose, Engine as _};
use image::{DynamicImage, ImageFormat};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Cursor;
use std::path::Path;

/// Parameters for one text-to-image request.
///
/// Values are carried exactly as given. Range checking belongs to the input
/// surface that collects them; nothing here clamps or rewrites a field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub negative_prompt: String,
    pub model_id: String,
    pub steps: u32,
    pub guidance_scale: f32,
    pub width: u32,
    pub height: u32,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        GenerationRequest {
            prompt: String::new(),
            negative_prompt: String::new(),
            model_id: String::new(),
            steps: 50,
            guidance_scale: 7.5,
            width: 512,
            height: 512,
        }
    }
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        GenerationRequest {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn with_negative_prompt(mut self, negative_prompt: impl Into<String>) -> Self {
        self.negative_prompt = negative_prompt.into();
        self
    }

    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_guidance_scale(mut self, guidance_scale: f32) -> Self {
        self.guidance_scale = guidance_scale;
        self
    }

    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// A decoded image returned by the inference service.
///
/// Dimensions come from the decoded pixel data, not from the request; the
/// service is free to return a different size than was asked for.
#[derive(Clone)]
pub struct GeneratedImage {
    pub image: DynamicImage,
    pub format: ImageFormat,
}

impl GeneratedImage {
    pub fn new(image: DynamicImage, format: ImageFormat) -> Self {
        GeneratedImage { image, format }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Write the image to disk. The encoding is chosen from the file
    /// extension of `path`; failures surface as
    /// [`InferenceError::DecodeError`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.image
            .save(path)
            .map_err(|e| InferenceError::DecodeError(format!("Failed to save image: {}", e)))
    }

    /// Re-encode the image as PNG bytes.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| {
                InferenceError::DecodeError(format!("Failed to encode image as PNG: {}", e))
            })?;
        Ok(bytes)
    }

    /// Re-encode the image as PNG and base64 the result.
    pub fn to_base64_png(&self) -> Result<String> {
        let bytes = self.to_png_bytes()?;
        Ok(general_purpose::STANDARD.encode(bytes))
    }
}

impl fmt::Debug for GeneratedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratedImage")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("format", &self.format)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn test_request_defaults() {
        let request = GenerationRequest::new("a watercolor fox");
        assert_eq!(request.prompt, "a watercolor fox");
        assert_eq!(request.negative_prompt, "");
        assert_eq!(request.model_id, "");
        assert_eq!(request.steps, 50);
        assert_eq!(request.guidance_scale, 7.5);
        assert_eq!(request.width, 512);
        assert_eq!(request.height, 512);
    }

    #[test]
    fn test_request_builders_carry_values_unchanged() {
        let request = GenerationRequest::new("prompt")
            .with_model("sd-community/sdxl-flash")
            .with_negative_prompt("blurry")
            .with_steps(999)
            .with_guidance_scale(0.25)
            .with_dimensions(100, 7000);

        // No clamping: out-of-range values pass through as given.
        assert_eq!(request.steps, 999);
        assert_eq!(request.guidance_scale, 0.25);
        assert_eq!(request.width, 100);
        assert_eq!(request.height, 7000);
    }

    #[test]
    fn test_png_round_trip() {
        let image = GeneratedImage::new(
            DynamicImage::ImageRgb8(RgbImage::new(3, 2)),
            ImageFormat::Png,
        );
        let bytes = image.to_png_bytes().unwrap();
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);

        let encoded = image.to_base64_png().unwrap();
        let decoded = general_purpose::STANDARD.decode(encoded).unwrap();
        assert_eq!(decoded, bytes);
    }

    #[test]
    fn test_debug_omits_pixel_data() {
        let image = GeneratedImage::new(
            DynamicImage::ImageRgb8(RgbImage::new(4, 4)),
            ImageFormat::Jpeg,
        );
        let rendered = format!("{:?}", image);
        assert!(rendered.contains("width: 4"));
        assert!(rendered.contains("Jpeg"));
    }

    #[test]
    fn test_save_failure_is_a_decode_error() {
        let image = GeneratedImage::new(
            DynamicImage::ImageRgb8(RgbImage::new(2, 2)),
            ImageFormat::Png,
        );
        // No extension, so no encoder can be picked for the path.
        let dir = tempfile::tempdir().unwrap();
        let err = image.save(dir.path().join("image")).unwrap_err();
        match err {
            InferenceError::DecodeError(message) => {
                assert!(message.contains("Failed to save image"));
            }
            other => panic!("expected a decode error, got {:?}", other),
        }
    }
}
