pub mod image_client;

use crate::{
    config::HuggingFaceConfig,
    error::{InferenceError, Result},
    generation::ImagePipeline,
};
use std::sync::Arc;
use std::time::Duration;

pub use image_client::ImageClient;

pub const DEFAULT_ENDPOINT: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Entry point for talking to the Hugging Face Inference API.
///
/// Construction validates credentials and builds the shared HTTP client,
/// including its request timeout; nothing after this point waits forever on
/// a silent connection.
#[derive(Clone)]
pub struct HuggingFaceClient {
    image_client: ImageClient,
}

impl HuggingFaceClient {
    pub fn new(config: HuggingFaceConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                InferenceError::ConfigError("Hugging Face API key is required".to_string())
            })?;

        let endpoint = config
            .endpoint
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let timeout_secs = config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| {
                InferenceError::ConfigError(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            image_client: ImageClient::new(client, endpoint, api_key),
        })
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }

    /// Generation pipeline backed by this client.
    pub fn pipeline(&self) -> ImagePipeline {
        ImagePipeline::new(Arc::new(self.image_client.clone()))
    }
}

impl std::fmt::Debug for HuggingFaceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HuggingFaceClient")
            .field("image_client", &self.image_client)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_is_a_config_error() {
        let err = HuggingFaceClient::new(HuggingFaceConfig::new()).unwrap_err();
        assert!(matches!(err, InferenceError::ConfigError(_)));
    }

    #[test]
    fn test_blank_api_key_is_a_config_error() {
        let config = HuggingFaceConfig::new().with_api_key("   ");
        assert!(HuggingFaceClient::new(config).is_err());
    }

    #[test]
    fn test_client_builds_with_key() {
        let config = HuggingFaceConfig::new()
            .with_api_key("hf_test")
            .with_timeout_secs(5);
        let client = HuggingFaceClient::new(config).unwrap();
        let _pipeline = client.pipeline();
        let _image = client.image();
    }

    #[test]
    fn test_debug_never_renders_the_api_key() {
        let config = HuggingFaceConfig::new().with_api_key("hf_secret_value");
        let client = HuggingFaceClient::new(config).unwrap();
        let rendered = format!("{:?}", client);
        assert!(rendered.contains("ImageClient"));
        assert!(!rendered.contains("hf_secret_value"));
    }
}
