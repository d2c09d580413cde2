pub mod gateway;
pub mod openai;
pub mod prompts;
pub mod router;

use std::{fmt::Debug, future::Future};

use serde::Deserialize;

/// A provider that can produce one completion for one content facet.
pub trait TextGenerator {
    type Error: Debug + Send;

    fn generate_text(
        &self,
        system: &str,
        prompt: &str,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}

/// A provider that can render one image and hand back a URL or data URI.
pub trait ImageGenerator {
    type Error: Debug;

    fn generate_image(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("Completion response contained no content")]
    EmptyCompletion,
    #[error("Image response contained no url or payload")]
    EmptyImage,
    #[error("No image providers configured")]
    NoProviders,
}

// Wire shapes shared by every OpenAI-compatible endpoint we talk to,
// directly or through the gateway.

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub id: Option<String>,
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub index: Option<u32>,
    pub message: CompletionMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    pub role: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ImagesResponse {
    pub data: Vec<ImageDatum>,
}

#[derive(Debug, Deserialize)]
pub struct ImageDatum {
    pub url: Option<String>,
    pub b64_json: Option<String>,
}

impl CompletionResponse {
    /// First choice's content, which is all the pipeline ever reads.
    pub(crate) fn into_content(self) -> Result<String, ProviderError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(ProviderError::EmptyCompletion)
    }
}

impl ImagesResponse {
    /// First image as a URL, or a data URI when the provider returned bytes.
    pub(crate) fn into_image_url(self) -> Result<String, ProviderError> {
        let datum = self.data.into_iter().next().ok_or(ProviderError::EmptyImage)?;
        if let Some(url) = datum.url {
            return Ok(url);
        }
        if let Some(b64) = datum.b64_json {
            return Ok(format!("data:image/png;base64,{b64}"));
        }
        Err(ProviderError::EmptyImage)
    }
}
