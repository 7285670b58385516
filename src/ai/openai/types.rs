//! OpenAI request/response payloads for the Images API.

use crate::ai::ImageReference;
use serde::{Deserialize, Serialize};

/// Request body for image generation.
#[derive(Debug, Serialize)]
pub struct ImageGenerationRequest {
    pub model: String,
    pub prompt: String,
    pub size: String,
    pub n: u32,
}

/// Top-level image generation response.
#[derive(Debug, Deserialize)]
pub struct ImageGenerationResponse {
    #[serde(default)]
    pub data: Vec<ImageData>,
}

/// One generated image item (URL or base64).
#[derive(Debug, Deserialize)]
pub struct ImageData {
    pub url: Option<String>,
    pub b64_json: Option<String>,
}

impl ImageGenerationResponse {
    /// Probe a parsed body for the first entry's image. Bodies that do not
    /// match the expected layout yield `None`.
    pub fn first_image(body: &serde_json::Value) -> Option<ImageReference> {
        let response = Self::deserialize(body).ok()?;
        let first = response.data.first()?;
        ImageReference::from_fields(first.url.as_deref(), first.b64_json.as_deref())
    }
}
