pub mod defaults;
mod error;
pub mod http;
mod llm;
pub mod normalize;
mod pipeline;
pub mod tracing;
pub mod yt;

pub use error::Error;
pub use llm::{
    gateway::GatewayClient,
    openai::OpenAiClient,
    router::{ImageChain, ImageProvider, TextRouter},
    ImageGenerator, ProviderError, TextGenerator,
};
pub use normalize::{normalize, NormalizeMode};
pub use pipeline::{builder::ShortsPipelineBuilder, ProcessOutcome, ShortsPipeline, SummarySet};
pub use yt::{MetadataFetcher, TranscriptFetcher, VideoMetadata};
