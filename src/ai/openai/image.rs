use super::client::OpenAiHttpClient;
use super::types::{ImageGenerationRequest, ImageGenerationResponse};
use crate::ai::{ImageGenerationService, ImageReference};
use crate::{Error, Result};
use async_trait::async_trait;

const IMAGE_SIZE: &str = "1024x1024";

pub struct OpenAiImageClient {
    http: OpenAiHttpClient,
    model: String,
}

impl OpenAiImageClient {
    pub fn new(http: OpenAiHttpClient, model: String) -> Self {
        Self { http, model }
    }
}

#[async_trait]
impl ImageGenerationService for OpenAiImageClient {
    async fn generate_image(&self, prompt: &str) -> Result<ImageReference> {
        let request = ImageGenerationRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            size: IMAGE_SIZE.to_string(),
            n: 1,
        };

        let response = self.http.post("/v1/images/generations", &request).await?;

        ImageGenerationResponse::first_image(&response).ok_or_else(|| {
            tracing::error!(
                "No image data found. Full response: {}",
                serde_json::to_string_pretty(&response).unwrap_or_default()
            );
            Error::MissingImageData { response }
        })
    }
}
