pub mod oembed;
pub mod transcript;

use std::{fmt::Debug, future::Future};

use serde::{Deserialize, Serialize};

pub trait MetadataFetcher {
    type Error: Debug;

    fn fetch_metadata(
        &self,
        video_url: &str,
    ) -> impl Future<Output = Result<VideoMetadata, Self::Error>> + Send;
}

pub trait TranscriptFetcher {
    type Error: Debug;

    fn fetch_transcript(
        &self,
        video_url: &str,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}

/// Video metadata as returned by the oEmbed endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub title: String,
    pub thumbnail_url: String,
    pub author_name: String,
    /// oEmbed carries no description; always empty for now.
    #[serde(default)]
    pub description: String,
}
