use std::sync::{Arc, Mutex};

use shorts_engine::TranscriptFetcher;

#[derive(Clone)]
pub struct MockTranscriptFetcher {
    pub transcript: String,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockTranscriptFetcher {
    pub fn new(transcript: &str) -> Self {
        Self {
            transcript: transcript.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    /// Fetch succeeds but the video has no caption text.
    pub fn empty() -> Self {
        Self::new("")
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::new("")
        }
    }
}

impl TranscriptFetcher for MockTranscriptFetcher {
    type Error = anyhow::Error;

    async fn fetch_transcript(&self, video_url: &str) -> Result<String, Self::Error> {
        self.calls.lock().unwrap().push(video_url.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.transcript.clone())
    }
}
