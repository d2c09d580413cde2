use std::ops::Deref;

use crate::{
    error::Error,
    yt::{MetadataFetcher, VideoMetadata},
};

pub struct OEmbedClient(pub reqwest::Client);

impl OEmbedClient {
    const OEMBED_URL: &'static str = "https://www.youtube.com/oembed";
}

impl Default for OEmbedClient {
    fn default() -> Self {
        Self(reqwest::Client::new())
    }
}

impl Deref for OEmbedClient {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl MetadataFetcher for OEmbedClient {
    type Error = Error;

    async fn fetch_metadata(&self, video_url: &str) -> Result<VideoMetadata, Self::Error> {
        let resp = self
            .get(Self::OEMBED_URL)
            .query(&[("url", video_url), ("format", "json")])
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(Error::Api { status, message });
        }

        Ok(resp.json::<VideoMetadata>().await?)
    }
}
