//! Request relay between the browser form and the image provider.

use crate::ai::openai::OpenAiHttpClient;
use crate::ai::{ImageGenerationService, OpenAiImageClient};
use crate::models::{Config, GenerationRequest, GenerationResponse};
use crate::prompts;
use crate::{Error, Result};
use tracing::{error, info, warn};

const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Validates a form submission, calls the provider once, and normalizes the
/// result into a displayable URL.
pub struct Relay {
    image_gen: Option<Box<dyn ImageGenerationService>>,
}

impl Relay {
    /// Build the relay from startup configuration. Without a usable key the
    /// relay still serves requests but answers each with a configuration error.
    pub fn from_config(config: &Config, http_client: reqwest::Client) -> Self {
        match config.api_key() {
            Some(api_key) => {
                info!("Image provider: OpenAI (model: {})", config.image_model);
                let http = OpenAiHttpClient::new_with_client(
                    api_key.clone(),
                    config.provider_timeout,
                    http_client,
                )
                .with_base_url(config.openai_base_url.clone());

                Self::with_service(Box::new(OpenAiImageClient::new(
                    http,
                    config.image_model.clone(),
                )))
            }
            None => {
                warn!("{} is not set; image generation is disabled", API_KEY_VAR);
                Self::unconfigured()
            }
        }
    }

    /// Build a relay around a concrete provider, e.g. a mock in tests.
    pub fn with_service(image_gen: Box<dyn ImageGenerationService>) -> Self {
        Self {
            image_gen: Some(image_gen),
        }
    }

    pub fn unconfigured() -> Self {
        Self { image_gen: None }
    }

    pub fn is_configured(&self) -> bool {
        self.image_gen.is_some()
    }

    pub async fn handle_generate(&self, request: &GenerationRequest) -> Result<GenerationResponse> {
        let request = request.normalized()?;

        let image_gen = self
            .image_gen
            .as_deref()
            .ok_or(Error::Configuration(API_KEY_VAR))?;

        info!(faith = %request.faith, sdg = %request.sdg, "Generating infographic");

        let prompt =
            prompts::compose_infographic_prompt(&request.faith, &request.sdg, &request.description);

        let image = image_gen.generate_image(&prompt).await.map_err(|e| {
            error!("Image generation failed: {}", e);
            e
        })?;

        Ok(GenerationResponse {
            url: image.into_display_url(),
        })
    }
}
