use super::{ImageGenerationService, ImageReference};
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

pub struct MockImageGenerationClient {
    image_responses: Arc<Mutex<Vec<ImageReference>>>,
    failure: Option<(u16, String)>,
    prompts: Arc<Mutex<Vec<String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockImageGenerationClient {
    pub fn new() -> Self {
        Self {
            image_responses: Arc::new(Mutex::new(Vec::new())),
            failure: None,
            prompts: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_image_response(self, response: ImageReference) -> Self {
        self.image_responses.lock().unwrap().push(response);
        self
    }

    /// Make every call fail as if the provider answered with `status`.
    pub fn with_provider_failure(mut self, status: u16, body: String) -> Self {
        self.failure = Some((status, body));
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Default for MockImageGenerationClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGenerationService for MockImageGenerationClient {
    async fn generate_image(&self, prompt: &str) -> Result<ImageReference> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some((status, body)) = &self.failure {
            return Err(Error::ProviderStatus {
                status: *status,
                body: body.clone(),
            });
        }

        let responses = self.image_responses.lock().unwrap();
        if responses.is_empty() {
            Ok(ImageReference::HostedUrl(
                "https://images.example.test/mock.png".to_string(),
            ))
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}
