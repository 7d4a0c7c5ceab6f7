pub mod decode;
pub mod traits;

use crate::{
    error::{InferenceError, Result},
    logger,
    models::{GeneratedImage, GenerationRequest},
};
use futures::stream::{self, Stream, StreamExt};
use std::pin::Pin;
use std::sync::Arc;
use uuid::Uuid;

pub use decode::decode_image;
pub use traits::InferenceBackend;

pub type GenerationStream = Pin<Box<dyn Stream<Item = Result<GeneratedImage>> + Send>>;

/// Drives text-to-image generation against a backend: preconditions, the
/// inference call, and decoding of the response body.
#[derive(Clone)]
pub struct ImagePipeline {
    backend: Arc<dyn InferenceBackend>,
}

impl ImagePipeline {
    pub fn new(backend: Arc<dyn InferenceBackend>) -> Self {
        Self { backend }
    }

    /// Run one request through the backend and decode the result.
    ///
    /// An unselected model or an empty prompt fails here, before any
    /// request is issued.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedImage> {
        if request.model_id.trim().is_empty() {
            return Err(InferenceError::ConfigError("No model selected".to_string()));
        }
        if request.prompt.trim().is_empty() {
            return Err(InferenceError::ConfigError(
                "Prompt must not be empty".to_string(),
            ));
        }

        let request_id = Uuid::new_v4();
        log::info!(
            "🎨 [{}] Generating image with model: {} ({}x{}, {} steps)",
            request_id,
            request.model_id,
            request.width,
            request.height,
            request.steps
        );

        let timer = logger::timer("image_generation");
        let bytes = self.backend.invoke(request).await?;
        let elapsed = timer.stop();

        log::debug!(
            "[{}] Received {} bytes from {} in {}ms",
            request_id,
            bytes.len(),
            self.backend.name(),
            elapsed.as_millis()
        );

        let image = decode_image(&bytes)?;
        log::info!(
            "✅ [{}] Decoded {}x{} image",
            request_id,
            image.width(),
            image.height()
        );
        Ok(image)
    }

    /// Lazily produce `count` images for the same request.
    ///
    /// Nothing is sent until the stream is polled, and each item polled
    /// issues exactly one backend call. A caller that stops consuming at
    /// the first error never triggers the remaining calls; a caller that
    /// keeps polling gets every per-item outcome.
    pub fn generate_stream(&self, request: GenerationRequest, count: u32) -> GenerationStream {
        let pipeline = self.clone();
        Box::pin(stream::unfold(0u32, move |produced| {
            let pipeline = pipeline.clone();
            let request = request.clone();
            async move {
                if produced >= count {
                    return None;
                }
                let result = pipeline.generate(&request).await;
                Some((result, produced + 1))
            }
        }))
    }

    /// Drive the stream to completion and collect every per-item outcome.
    pub async fn generate_batch(
        &self,
        request: GenerationRequest,
        count: u32,
    ) -> Vec<Result<GeneratedImage>> {
        self.generate_stream(request, count).collect().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct UnreachableBackend;

    #[async_trait]
    impl InferenceBackend for UnreachableBackend {
        fn name(&self) -> &str {
            "unreachable"
        }

        async fn invoke(&self, _request: &GenerationRequest) -> Result<Vec<u8>> {
            panic!("backend must not be called");
        }
    }

    fn pipeline() -> ImagePipeline {
        ImagePipeline::new(Arc::new(UnreachableBackend))
    }

    #[tokio::test]
    async fn test_missing_model_fails_before_backend() {
        let request = GenerationRequest::new("a prompt");
        let err = pipeline().generate(&request).await.unwrap_err();
        assert!(matches!(err, InferenceError::ConfigError(_)));
    }

    #[tokio::test]
    async fn test_empty_prompt_fails_before_backend() {
        let request = GenerationRequest::new("   ").with_model("sd-community/sdxl-flash");
        let err = pipeline().generate(&request).await.unwrap_err();
        assert!(matches!(err, InferenceError::ConfigError(_)));
    }

    #[tokio::test]
    async fn test_unpolled_stream_issues_no_calls() {
        let request = GenerationRequest::new("a prompt").with_model("sd-community/sdxl-flash");
        // Building the stream must not touch the backend.
        let _stream = pipeline().generate_stream(request, 3);
    }

    #[tokio::test]
    async fn test_zero_count_stream_is_empty() {
        let request = GenerationRequest::new("a prompt").with_model("sd-community/sdxl-flash");
        let results = pipeline().generate_batch(request, 0).await;
        assert!(results.is_empty());
    }
}
