use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use chrono::Utc;
use shorts_datastore::{HistoryRecord, HistoryStore, NewHistoryRecord};
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct MockHistoryStore {
    /// Pre-seeded listing returned by `list_records`.
    pub records: Vec<HistoryRecord>,
    /// Ids `delete_record` reports as existing.
    pub known_ids: HashSet<Uuid>,
    pub inserted: Arc<Mutex<Vec<NewHistoryRecord>>>,
    pub deleted: Arc<Mutex<Vec<Uuid>>>,
    pub fail_with: Option<String>,
}

impl MockHistoryStore {
    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }

    pub fn sample_record() -> HistoryRecord {
        HistoryRecord {
            id: Uuid::new_v4(),
            video_url: "https://youtu.be/sample".to_string(),
            title: "A Guided Meditation".to_string(),
            channel_name: "Calm Channel".to_string(),
            transcript: "breathe in, breathe out".to_string(),
            structured: "- breathe".to_string(),
            spiritual: "breath is the bridge".to_string(),
            quote: "Breathe.".to_string(),
            image_prompt: "soft light over still water".to_string(),
            image_url: "https://images.example/sample.png".to_string(),
            created_at: Utc::now(),
        }
    }
}

impl HistoryStore for MockHistoryStore {
    async fn insert_record(&self, record: &NewHistoryRecord) -> anyhow::Result<HistoryRecord> {
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        self.inserted.lock().unwrap().push(record.clone());
        Ok(HistoryRecord {
            id: Uuid::new_v4(),
            video_url: record.video_url.clone(),
            title: record.title.clone(),
            channel_name: record.channel_name.clone(),
            transcript: record.transcript.clone(),
            structured: record.structured.clone(),
            spiritual: record.spiritual.clone(),
            quote: record.quote.clone(),
            image_prompt: record.image_prompt.clone(),
            image_url: record.image_url.clone(),
            created_at: Utc::now(),
        })
    }

    async fn list_records(&self, limit: i64) -> anyhow::Result<Vec<HistoryRecord>> {
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.records.iter().take(limit as usize).cloned().collect())
    }

    async fn delete_record(&self, id: Uuid) -> anyhow::Result<bool> {
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        self.deleted.lock().unwrap().push(id);
        Ok(self.known_ids.contains(&id))
    }
}
