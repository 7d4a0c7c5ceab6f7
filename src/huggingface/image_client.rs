use crate::{
    error::{InferenceError, Result},
    generation::InferenceBackend,
    models::{GenerationRequest, ModelInfo, SUPPORTED_MODELS},
};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

/// Request body for the hosted text-to-image task.
///
/// Field names are the API's, not ours; the request is exactly these fields
/// and nothing else.
#[derive(Debug, Serialize)]
struct InferencePayload<'a> {
    inputs: &'a str,
    negative_prompt: &'a str,
    num_inference_steps: u32,
    guidance_scale: f32,
    width: u32,
    height: u32,
}

impl<'a> InferencePayload<'a> {
    fn from_request(request: &'a GenerationRequest) -> Self {
        InferencePayload {
            inputs: &request.prompt,
            negative_prompt: &request.negative_prompt,
            num_inference_steps: request.steps,
            guidance_scale: request.guidance_scale,
            width: request.width,
            height: request.height,
        }
    }
}

/// Client for the Hugging Face Inference API text-to-image endpoint.
#[derive(Clone)]
pub struct ImageClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl ImageClient {
    pub fn new(client: Client, endpoint: String, api_key: String) -> Self {
        Self {
            client,
            endpoint,
            api_key,
        }
    }

    /// Models this crate knows about, in display order.
    pub fn supported_models() -> &'static [ModelInfo] {
        SUPPORTED_MODELS
    }

    fn model_url(&self, model_id: &str) -> String {
        format!("{}/models/{}", self.endpoint.trim_end_matches('/'), model_id)
    }

    /// POST one generation request and return the raw response body.
    ///
    /// A non-success status becomes `RemoteError` carrying the status code
    /// and the body text exactly as the service sent it.
    pub async fn invoke(&self, request: &GenerationRequest) -> Result<Vec<u8>> {
        if request.model_id.trim().is_empty() {
            return Err(InferenceError::RequestError(
                "Model id is required".to_string(),
            ));
        }

        let payload = InferencePayload::from_request(request);

        log::info!("Generating image with model: {}", request.model_id);

        let response = self
            .client
            .post(self.model_url(&request.model_id))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    InferenceError::TransportError(format!("Inference request timed out: {}", e))
                } else {
                    InferenceError::TransportError(format!("Inference request failed: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Inference API returned {} for {}", status, request.model_id);
            return Err(InferenceError::RemoteError {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(|e| {
            InferenceError::TransportError(format!("Failed to read response body: {}", e))
        })?;

        Ok(bytes.to_vec())
    }
}

// Never print the bearer key.
impl std::fmt::Debug for ImageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageClient")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

#[async_trait]
impl InferenceBackend for ImageClient {
    fn name(&self) -> &str {
        "huggingface"
    }

    async fn invoke(&self, request: &GenerationRequest) -> Result<Vec<u8>> {
        ImageClient::invoke(self, request).await
    }
}
