use std::sync::{Arc, Mutex};

use shorts_engine::{MetadataFetcher, VideoMetadata};

#[derive(Clone)]
pub struct MockMetadataFetcher {
    pub metadata: VideoMetadata,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockMetadataFetcher {
    pub fn new() -> Self {
        Self {
            metadata: VideoMetadata {
                title: "The Power of Now".to_string(),
                thumbnail_url: "https://i.ytimg.com/vi/test/hqdefault.jpg".to_string(),
                author_name: "Eckhart Tolle".to_string(),
                description: String::new(),
            },
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::new()
        }
    }
}

impl MetadataFetcher for MockMetadataFetcher {
    type Error = anyhow::Error;

    async fn fetch_metadata(&self, video_url: &str) -> Result<VideoMetadata, Self::Error> {
        self.calls.lock().unwrap().push(video_url.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.metadata.clone())
    }
}
