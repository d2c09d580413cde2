use reqwest::Client;

use crate::llm::{
    CompletionResponse, ImageGenerator, ImagesResponse, ProviderError, TextGenerator,
};

/// Routing header understood by the provider-agnostic AI gateway.
const PROVIDER_HEADER: &str = "X-Vercel-AI-Provider";

/// Client for the OpenAI-compatible gateway that fronts the upstream AI
/// vendors. Requests carry a routing header naming the vendor; the model id
/// is vendor-prefixed (e.g. `perplexity/sonar-pro`).
#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: Client,
    base_url: String,
    token: String,
    provider: String,
    text_model: String,
    image_model: String,
}

impl GatewayClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://ai-gateway.vercel.sh/v1";
    pub const DEFAULT_PROVIDER: &'static str = "perplexity";
    pub const DEFAULT_TEXT_MODEL: &'static str = "perplexity/sonar-pro";
    pub const DEFAULT_IMAGE_MODEL: &'static str = "openai/dall-e-3";

    pub fn new(token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Self::DEFAULT_BASE_URL.into(),
            token: token.into(),
            provider: Self::DEFAULT_PROVIDER.into(),
            text_model: Self::DEFAULT_TEXT_MODEL.into(),
            image_model: Self::DEFAULT_IMAGE_MODEL.into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    pub fn with_text_model(mut self, model: impl Into<String>) -> Self {
        self.text_model = model.into();
        self
    }

    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    async fn send_completion_request(
        &self,
        system: &str,
        user: &str,
    ) -> Result<CompletionResponse, ProviderError> {
        let body = serde_json::json!({
            "model": self.text_model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user }
            ]
        });

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.token)
            .header(PROVIDER_HEADER, &self.provider)
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
            "model": self.image_model,
            "prompt": prompt,
            "n": 1,
            "size": "1024x1792"
        });

        let resp = self
            .client
            .post(format!("{}/images/generations", self.base_url))
            .bearer_auth(&self.token)
            .header(PROVIDER_HEADER, &self.provider)
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

impl TextGenerator for GatewayClient {
    type Error = ProviderError;

    async fn generate_text(&self, system: &str, prompt: &str) -> Result<String, Self::Error> {
        let response = self
            .send_completion_request(system, prompt)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Gateway completion failed"))?;

        response.into_content()
    }
}

impl ImageGenerator for GatewayClient {
    type Error = ProviderError;

    async fn generate_image(&self, prompt: &str) -> Result<String, Self::Error> {
        let response = self
            .send_image_request(prompt)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Gateway image generation failed"))?;

        response.into_image_url()
    }
}
