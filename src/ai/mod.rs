//! Image-generation provider integration
//!
//! The relay talks to the provider through [`ImageGenerationService`]. The
//! provider answers with either a hosted URL or inline base64 bytes, captured
//! by [`ImageReference`].

pub mod mock;
pub mod openai;

pub use mock::MockImageGenerationClient;
pub use openai::OpenAiImageClient;

use crate::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// One generated image, as handed back by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageReference {
    HostedUrl(String),
    InlineBase64(String),
}

impl ImageReference {
    /// Pick the usable field of a result entry. A non-empty URL wins over
    /// base64; empty strings count as absent.
    pub fn from_fields(url: Option<&str>, b64_json: Option<&str>) -> Option<Self> {
        let present = |value: Option<&str>| value.filter(|v| !v.is_empty()).map(str::to_string);

        present(url)
            .map(ImageReference::HostedUrl)
            .or_else(|| present(b64_json).map(ImageReference::InlineBase64))
    }

    /// URL the browser can put straight into an `<img src>`.
    pub fn into_display_url(self) -> String {
        match self {
            ImageReference::HostedUrl(url) => url,
            ImageReference::InlineBase64(b64) => format!("data:image/png;base64,{}", b64),
        }
    }
}

#[async_trait]
pub trait ImageGenerationService: Send + Sync {
    async fn generate_image(&self, prompt: &str) -> Result<ImageReference>;
}

#[async_trait]
impl<T: ImageGenerationService + ?Sized> ImageGenerationService for Arc<T> {
    async fn generate_image(&self, prompt: &str) -> Result<ImageReference> {
        (**self).generate_image(prompt).await
    }
}
