use std::sync::{Arc, Mutex};

use shorts_engine::TextGenerator;

#[derive(Clone)]
pub struct MockTextGenerator {
    pub reply: String,
    /// Recorded (system, prompt) pairs.
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
    pub fail_with: Option<String>,
    /// When set, only calls whose system instruction contains this fragment
    /// fail; the rest succeed.
    pub fail_when_system_contains: Option<String>,
}

impl MockTextGenerator {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
            fail_when_system_contains: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::new("")
        }
    }

    pub fn failing_for(system_fragment: &str, msg: &str, reply: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            fail_when_system_contains: Some(system_fragment.to_string()),
            ..Self::new(reply)
        }
    }
}

impl TextGenerator for MockTextGenerator {
    type Error = anyhow::Error;

    async fn generate_text(&self, system: &str, prompt: &str) -> Result<String, Self::Error> {
        self.calls
            .lock()
            .unwrap()
            .push((system.to_string(), prompt.to_string()));

        if let Some(ref msg) = self.fail_with {
            let applies = self
                .fail_when_system_contains
                .as_deref()
                .is_none_or(|fragment| system.contains(fragment));
            if applies {
                return Err(anyhow::anyhow!("{}", msg));
            }
        }

        Ok(self.reply.clone())
    }
}
