use crate::llm::{
    gateway::GatewayClient, openai::OpenAiClient, ImageGenerator, ProviderError, TextGenerator,
};

/// The configured text adapter. One of these handles all four facet calls.
#[derive(Debug, Clone)]
pub enum TextRouter {
    Gateway(GatewayClient),
    OpenAi(OpenAiClient),
}

impl TextGenerator for TextRouter {
    type Error = ProviderError;

    async fn generate_text(&self, system: &str, prompt: &str) -> Result<String, Self::Error> {
        match self {
            TextRouter::Gateway(client) => client.generate_text(system, prompt).await,
            TextRouter::OpenAi(client) => client.generate_text(system, prompt).await,
        }
    }
}

/// One image adapter in the chain.
#[derive(Debug, Clone)]
pub enum ImageProvider {
    Gateway(GatewayClient),
    OpenAi(OpenAiClient),
}

impl ImageProvider {
    fn name(&self) -> &'static str {
        match self {
            ImageProvider::Gateway(_) => "gateway",
            ImageProvider::OpenAi(_) => "openai",
        }
    }
}

impl ImageGenerator for ImageProvider {
    type Error = ProviderError;

    async fn generate_image(&self, prompt: &str) -> Result<String, Self::Error> {
        match self {
            ImageProvider::Gateway(client) => client.generate_image(prompt).await,
            ImageProvider::OpenAi(client) => client.generate_image(prompt).await,
        }
    }
}

/// Ordered image providers, tried in sequence until one succeeds.
#[derive(Debug, Clone)]
pub struct ImageChain {
    providers: Vec<ImageProvider>,
}

impl ImageChain {
    pub fn new(providers: Vec<ImageProvider>) -> Self {
        Self { providers }
    }
}

impl ImageGenerator for ImageChain {
    type Error = ProviderError;

    async fn generate_image(&self, prompt: &str) -> Result<String, Self::Error> {
        let mut last_err = None;
        for provider in &self.providers {
            match provider.generate_image(prompt).await {
                Ok(url) => return Ok(url),
                Err(e) => {
                    tracing::warn!(
                        provider = provider.name(),
                        error = ?e,
                        "Image provider failed, trying next in chain"
                    );
                    last_err = Some(e);
                }
            }
        }
        Err(last_err.unwrap_or(ProviderError::NoProviders))
    }
}
