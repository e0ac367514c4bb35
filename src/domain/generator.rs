use async_trait::async_trait;
use thiserror::Error;

/// A successfully generated image, as returned by the upstream provider.
///
/// The payload stays base64-encoded: the preview page embeds it verbatim in
/// a data URL, and the download route decodes it just before transmission.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub image_b64: String,
}

/// Why a generation call produced no usable image.
///
/// Callers treat both variants the same (the image is unavailable); the
/// split lets logs tell an unreachable upstream from a misbehaving one.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("image generation request failed: {0}")]
    Upstream(String),
    #[error("image generation returned no usable payload: {0}")]
    InvalidPayload(String),
}

/// Capability for turning a text prompt into an image.
///
/// Provided to the application state at construction so handlers can be
/// exercised against a substitute implementation.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, GenerateError>;
}
