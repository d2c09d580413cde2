use anyhow::Context;
use chrono::Utc;
use sqlx::{migrate::Migrator, postgres::PgPoolOptions, PgPool};
use uuid::Uuid;

use crate::{datastore::HistoryStore, HistoryRecord, NewHistoryRecord};

static MIGRATOR: Migrator = sqlx::migrate!();

#[derive(Debug, Clone)]
pub struct PgHistoryStore {
    pub pool: PgPool,
}

impl PgHistoryStore {
    /// Establish connection to database and create the history_records
    /// table if not exists
    pub async fn init(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .inspect_err(
                |e| tracing::error!(error = ?e, "Failed to establish connection to database"),
            )
            .context("Failed to connect to postgres database")?;

        MIGRATOR
            .run(&pool)
            .await
            .inspect_err(|e| tracing::error!(error = ?e, "Failed to run database migrations"))
            .context("Failed to run database migrations")?;

        Ok(PgHistoryStore { pool })
    }
}

impl HistoryStore for PgHistoryStore {
    async fn insert_record(&self, record: &NewHistoryRecord) -> anyhow::Result<HistoryRecord> {
        let id = Uuid::new_v4();
        let created_at = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO history_records
                (id, video_url, title, channel_name, transcript,
                 structured, spiritual, quote, image_prompt, image_url, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(id)
        .bind(&record.video_url)
        .bind(&record.title)
        .bind(&record.channel_name)
        .bind(&record.transcript)
        .bind(&record.structured)
        .bind(&record.spiritual)
        .bind(&record.quote)
        .bind(&record.image_prompt)
        .bind(&record.image_url)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .inspect_err(|err| {
            tracing::error!(
                error = ?err,
                video_url = %record.video_url,
                "Failed to insert history record"
            )
        })
        .context("Failed to insert history record")?;

        Ok(HistoryRecord {
            id,
            video_url: record.video_url.clone(),
            title: record.title.clone(),
            channel_name: record.channel_name.clone(),
            transcript: record.transcript.clone(),
            structured: record.structured.clone(),
            spiritual: record.spiritual.clone(),
            quote: record.quote.clone(),
            image_prompt: record.image_prompt.clone(),
            image_url: record.image_url.clone(),
            created_at,
        })
    }

    async fn list_records(&self, limit: i64) -> anyhow::Result<Vec<HistoryRecord>> {
        let records = sqlx::query_as::<_, HistoryRecord>(
            r#"
            SELECT id, video_url, title, channel_name, transcript,
                   structured, spiritual, quote, image_prompt, image_url, created_at
            FROM history_records
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .inspect_err(|e| {
            tracing::error!(error = ?e, "Failed to fetch history records");
        })
        .context("Failed to fetch history records")?;

        Ok(records)
    }

    async fn delete_record(&self, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM history_records WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .inspect_err(|e| {
                tracing::error!(error = ?e, %id, "Failed to delete history record");
            })
            .context("Failed to delete history record")?;

        Ok(result.rows_affected() > 0)
    }
}
