use std::env;

/// Connection settings for the Hugging Face Inference API.
///
/// All fields are optional here; validation happens when the client is
/// built, not at assembly time.
#[derive(Debug, Clone)]
pub struct HuggingFaceConfig {
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Default for HuggingFaceConfig {
    fn default() -> Self {
        HuggingFaceConfig {
            api_key: None,
            endpoint: None,
            timeout_secs: None,
        }
    }
}

impl HuggingFaceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = env::var("HUGGINGFACE_API_KEY").ok();
        let endpoint = env::var("HUGGINGFACE_ENDPOINT").ok();
        let timeout_secs = env::var("HUGGINGFACE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok());

        HuggingFaceConfig {
            api_key,
            endpoint,
            timeout_secs,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }
}
