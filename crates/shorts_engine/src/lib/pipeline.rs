use serde::{Deserialize, Serialize};
use shorts_datastore::{HistoryStore, NewHistoryRecord};

use crate::{
    defaults,
    llm::{prompts, ImageGenerator, TextGenerator},
    normalize::{normalize, NormalizeMode},
    yt::{MetadataFetcher, TranscriptFetcher, VideoMetadata},
};

pub mod builder;

/// The five-field output bundle produced per processed video.
///
/// Every field is always populated: either model-derived or one of the
/// fixed fallbacks from [`crate::defaults`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarySet {
    pub structured: String,
    pub spiritual: String,
    pub quote: String,
    pub image_prompt: String,
    pub image_url: String,
}

impl SummarySet {
    /// The full mock set substituted when the text-generation batch fails.
    pub fn mock() -> Self {
        SummarySet {
            structured: defaults::MOCK_STRUCTURED.to_string(),
            spiritual: defaults::MOCK_SPIRITUAL.to_string(),
            quote: defaults::MOCK_QUOTE.to_string(),
            image_prompt: defaults::MOCK_IMAGE_PROMPT.to_string(),
            image_url: defaults::FALLBACK_IMAGE_URL.to_string(),
        }
    }
}

/// Response payload for one processed video.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessOutcome {
    pub metadata: VideoMetadata,
    pub transcript: String,
    pub summaries: SummarySet,
}

/// Outputs of the four-way text batch, after cleanup.
struct GeneratedTexts {
    structured: String,
    spiritual: String,
    quote: String,
    image_prompt: String,
}

// The core video-to-summary-set pipeline
#[derive(Debug)]
pub struct ShortsPipeline<M, C, T, I, S>
where
    M: MetadataFetcher + Send + Sync + 'static,
    C: TranscriptFetcher + Send + Sync + 'static,
    T: TextGenerator + Send + Sync + 'static,
    I: ImageGenerator + Send + Sync + 'static,
    S: HistoryStore + Send + Sync + 'static,
{
    metadata_fetcher: M,
    transcript_fetcher: C,
    text_generator: T,
    image_generator: I,
    store: S,
}

impl<M, C, T, I, S> ShortsPipeline<M, C, T, I, S>
where
    M: MetadataFetcher + Send + Sync + 'static,
    C: TranscriptFetcher + Send + Sync + 'static,
    T: TextGenerator + Send + Sync + 'static,
    I: ImageGenerator + Send + Sync + 'static,
    S: HistoryStore + Send + Sync + 'static,
{
    /// Processes one video URL end to end.
    ///
    /// Only the metadata fetch is fatal. Every later stage degrades to its
    /// fixed fallback content, so a caller that gets past metadata always
    /// receives a fully populated [`SummarySet`].
    #[tracing::instrument(skip(self))]
    pub async fn process(&self, video_url: &str) -> anyhow::Result<ProcessOutcome> {
        let metadata = self
            .metadata_fetcher
            .fetch_metadata(video_url)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to fetch video metadata: {e:?}"))?;

        let transcript = self.fetch_transcript_or_placeholder(video_url).await;

        // The image prompt is a batch output, so the image stage can only
        // start once the whole batch has settled. A failed batch skips the
        // image call entirely and falls back to the placeholder URL.
        let summaries = match self.generate_texts(&transcript).await {
            Ok(texts) => {
                let image_url = self.generate_image_or_placeholder(&texts.image_prompt).await;
                SummarySet {
                    structured: texts.structured,
                    spiritual: texts.spiritual,
                    quote: texts.quote,
                    image_prompt: texts.image_prompt,
                    image_url,
                }
            }
            Err(e) => {
                tracing::error!(
                    error = ?e,
                    "Text generation batch failed, substituting mock summaries"
                );
                SummarySet::mock()
            }
        };

        self.persist(video_url, &metadata, &transcript, &summaries)
            .await;

        Ok(ProcessOutcome {
            metadata,
            transcript,
            summaries,
        })
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_transcript_or_placeholder(&self, video_url: &str) -> String {
        match self.transcript_fetcher.fetch_transcript(video_url).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                tracing::warn!("Transcript empty, using placeholder");
                defaults::PLACEHOLDER_TRANSCRIPT.to_string()
            }
            Err(e) => {
                tracing::warn!(error = ?e, "Failed to fetch transcript, using placeholder");
                defaults::PLACEHOLDER_TRANSCRIPT.to_string()
            }
        }
    }

    /// Issues all four facet calls before awaiting any of them. One
    /// rejection fails the whole batch; there is no per-field fallback.
    #[tracing::instrument(skip_all)]
    async fn generate_texts(&self, transcript: &str) -> Result<GeneratedTexts, T::Error> {
        let excerpt = truncate_chars(transcript, prompts::PROMPT_CHAR_LIMIT);

        let structured_user = prompts::structured_user(excerpt);
        let essence_user = prompts::essence_user(excerpt);
        let quote_user = prompts::quote_user(excerpt);
        let image_prompt_user = prompts::image_prompt_user(excerpt);

        let (structured, spiritual, quote, image_prompt) = futures::try_join!(
            self.text_generator
                .generate_text(prompts::STRUCTURED_SYSTEM, &structured_user),
            self.text_generator
                .generate_text(prompts::ESSENCE_SYSTEM, &essence_user),
            self.text_generator
                .generate_text(prompts::QUOTE_SYSTEM, &quote_user),
            self.text_generator
                .generate_text(prompts::IMAGE_PROMPT_SYSTEM, &image_prompt_user),
        )?;

        Ok(GeneratedTexts {
            structured: normalize(&structured, NormalizeMode::Summary),
            spiritual: normalize(&spiritual, NormalizeMode::Strict),
            quote: normalize(&quote, NormalizeMode::Strict),
            image_prompt: normalize(&image_prompt, NormalizeMode::Strict),
        })
    }

    #[tracing::instrument(skip(self))]
    async fn generate_image_or_placeholder(&self, image_prompt: &str) -> String {
        let prompt = prompts::image_generation_prompt(image_prompt);
        match self.image_generator.generate_image(&prompt).await {
            Ok(url) => url,
            Err(e) => {
                tracing::error!(error = ?e, "Image generation failed, using placeholder image");
                defaults::FALLBACK_IMAGE_URL.to_string()
            }
        }
    }

    /// Persistence never affects the response; failures are logged and
    /// dropped.
    #[tracing::instrument(skip_all)]
    async fn persist(
        &self,
        video_url: &str,
        metadata: &VideoMetadata,
        transcript: &str,
        summaries: &SummarySet,
    ) {
        let record = NewHistoryRecord {
            video_url: video_url.to_string(),
            title: metadata.title.clone(),
            channel_name: metadata.author_name.clone(),
            transcript: truncate_chars(transcript, defaults::STORED_TRANSCRIPT_CHAR_LIMIT)
                .to_string(),
            structured: summaries.structured.clone(),
            spiritual: summaries.spiritual.clone(),
            quote: summaries.quote.clone(),
            image_prompt: summaries.image_prompt.clone(),
            image_url: summaries.image_url.clone(),
        };

        if let Err(e) = self.store.insert_record(&record).await {
            tracing::error!(error = ?e, video_url, "Failed to persist history record");
        }
    }
}

/// Truncates on a character boundary, never mid-codepoint.
fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::truncate_chars;

    #[test]
    fn truncate_chars_counts_characters_not_bytes() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("日本語のテキスト", 3), "日本語");
        assert_eq!(truncate_chars("short", 100), "short");
        assert_eq!(truncate_chars("", 10), "");
    }
}
