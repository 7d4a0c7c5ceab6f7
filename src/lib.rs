//! Text-to-image generation client for the Hugging Face Inference API.
//!
//! The crate splits into a thin HTTP client ([`HuggingFaceClient`]), typed
//! request and image models, and an [`ImagePipeline`] that runs the
//! preconditions, the inference call, and response decoding for one or more
//! images per prompt.
//!
//! ```no_run
//! use rimgen::{GenerationRequest, HuggingFaceClient, HuggingFaceConfig};
//!
//! #[tokio::main]
//! async fn main() -> rimgen::Result<()> {
//!     let client = HuggingFaceClient::new(HuggingFaceConfig::from_env())?;
//!
//!     let request = GenerationRequest::new("a watercolor fox in the snow")
//!         .with_model("sd-community/sdxl-flash");
//!
//!     let image = client.pipeline().generate(&request).await?;
//!     image.save("fox.png")?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod generation;
pub mod huggingface;
pub mod logger;
pub mod models;
pub mod session;

pub use config::HuggingFaceConfig;
pub use error::{InferenceError, Result};
pub use generation::{decode_image, GenerationStream, ImagePipeline, InferenceBackend};
pub use huggingface::{HuggingFaceClient, ImageClient};
pub use models::{GeneratedImage, GenerationRequest, ModelInfo, SUPPORTED_MODELS};
pub use session::SessionState;
