use std::sync::{Arc, Mutex};

use shorts_engine::ImageGenerator;

#[derive(Clone)]
pub struct MockImageGenerator {
    pub url: String,
    /// Recorded prompts.
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockImageGenerator {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::new("")
        }
    }
}

impl ImageGenerator for MockImageGenerator {
    type Error = anyhow::Error;

    async fn generate_image(&self, prompt: &str) -> Result<String, Self::Error> {
        self.calls.lock().unwrap().push(prompt.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.url.clone())
    }
}
