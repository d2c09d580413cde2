use reqwest::Client;

use crate::llm::{
    CompletionResponse, ImageGenerator, ImagesResponse, ProviderError, TextGenerator,
};

/// Direct OpenAI API client. Default image backend; the gateway's image
/// routes are not usable with our account.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com/v1";
    pub const TEXT_MODEL: &'static str = "gpt-4o-mini";
    pub const IMAGE_MODEL: &'static str = "dall-e-3";
    /// 9:16 portrait, the largest vertical size dall-e-3 renders.
    pub const IMAGE_SIZE: &'static str = "1024x1792";

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: Self::DEFAULT_BASE_URL.into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    async fn send_completion_request(
        &self,
        system: &str,
        user: &str,
    ) -> Result<CompletionResponse, ProviderError> {
        let body = serde_json::json!({
            "model": Self::TEXT_MODEL,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user }
            ]
        });

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Api { status, message });
        }

        Ok(resp.json::<CompletionResponse>().await?)
    }

    async fn send_image_request(&self, prompt: &str) -> Result<ImagesResponse, ProviderError> {
        let body = serde_json::json!({
            "model": Self::IMAGE_MODEL,
            "prompt": prompt,
            "n": 1,
            "size": Self::IMAGE_SIZE
        });

        let resp = self
            .client
            .post(format!("{}/images/generations", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Api { status, message });
        }

        Ok(resp.json::<ImagesResponse>().await?)
    }
}

impl TextGenerator for OpenAiClient {
    type Error = ProviderError;

    async fn generate_text(&self, system: &str, prompt: &str) -> Result<String, Self::Error> {
        let response = self
            .send_completion_request(system, prompt)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "OpenAI completion failed"))?;

        response.into_content()
    }
}

impl ImageGenerator for OpenAiClient {
    type Error = ProviderError;

    async fn generate_image(&self, prompt: &str) -> Result<String, Self::Error> {
        let response = self
            .send_image_request(prompt)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "OpenAI image generation failed"))?;

        response.into_image_url()
    }
}
