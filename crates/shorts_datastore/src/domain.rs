use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted generation, as served on the history list.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct HistoryRecord {
    pub id: Uuid,
    pub video_url: String,
    pub title: String,
    pub channel_name: String,
    /// Stored transcript, truncated by the caller before insertion.
    pub transcript: String,
    pub structured: String,
    pub spiritual: String,
    pub quote: String,
    pub image_prompt: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload; `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewHistoryRecord {
    pub video_url: String,
    pub title: String,
    pub channel_name: String,
    pub transcript: String,
    pub structured: String,
    pub spiritual: String,
    pub quote: String,
    pub image_prompt: String,
    pub image_url: String,
}
