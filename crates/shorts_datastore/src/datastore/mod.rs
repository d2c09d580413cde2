use std::future::Future;

use uuid::Uuid;

use crate::{HistoryRecord, NewHistoryRecord};

pub mod postgres;

pub trait HistoryStore {
    fn insert_record(
        &self,
        record: &NewHistoryRecord,
    ) -> impl Future<Output = anyhow::Result<HistoryRecord>> + Send;

    /// Most recent records first.
    fn list_records(
        &self,
        limit: i64,
    ) -> impl Future<Output = anyhow::Result<Vec<HistoryRecord>>> + Send;

    /// Returns `false` when no record with `id` existed.
    fn delete_record(&self, id: Uuid) -> impl Future<Output = anyhow::Result<bool>> + Send;
}

impl<T: HistoryStore + Send + Sync> HistoryStore for &T {
    async fn insert_record(&self, record: &NewHistoryRecord) -> anyhow::Result<HistoryRecord> {
        (**self).insert_record(record).await
    }

    async fn list_records(&self, limit: i64) -> anyhow::Result<Vec<HistoryRecord>> {
        (**self).list_records(limit).await
    }

    async fn delete_record(&self, id: Uuid) -> anyhow::Result<bool> {
        (**self).delete_record(id).await
    }
}

/// Store selected at startup. `Disabled` is the placeholder used when no
/// database URL is configured: writes are dropped with a warning and the
/// history list is empty, but the service keeps running.
#[derive(Debug, Clone)]
pub enum HistoryBackend {
    Postgres(postgres::PgHistoryStore),
    Disabled,
}

impl HistoryStore for HistoryBackend {
    async fn insert_record(&self, record: &NewHistoryRecord) -> anyhow::Result<HistoryRecord> {
        match self {
            HistoryBackend::Postgres(store) => store.insert_record(record).await,
            HistoryBackend::Disabled => {
                tracing::warn!(
                    video_url = %record.video_url,
                    "History store disabled, dropping record"
                );
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
                    created_at: chrono::Utc::now(),
                })
            }
        }
    }

    async fn list_records(&self, limit: i64) -> anyhow::Result<Vec<HistoryRecord>> {
        match self {
            HistoryBackend::Postgres(store) => store.list_records(limit).await,
            HistoryBackend::Disabled => Ok(Vec::new()),
        }
    }

    async fn delete_record(&self, id: Uuid) -> anyhow::Result<bool> {
        match self {
            HistoryBackend::Postgres(store) => store.delete_record(id).await,
            HistoryBackend::Disabled => Ok(false),
        }
    }
}
