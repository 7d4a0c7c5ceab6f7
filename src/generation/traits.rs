use crate::error::Result;
use crate::models::GenerationRequest;
use async_trait::async_trait;

/// A service that can run a single text-to-image inference call.
///
/// Implementations return the raw response body; whether those bytes decode
/// as an image is decided downstream.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    /// Backend name used in logs.
    fn name(&self) -> &str;

    /// Run one inference call for `request` and return the response bytes.
    async fn invoke(&self, request: &GenerationRequest) -> Result<Vec<u8>>;
}
