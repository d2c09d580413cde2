//! HTTP surface of the generation service.
//!
//! Only two outcomes are visible on the wire for a processing request: a
//! `200` with a fully populated summary set (possibly built from fallback
//! content), or a generic `500`. Partial upstream failures are never
//! surfaced as structured errors.

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use shorts_datastore::HistoryStore;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use crate::{
    defaults,
    llm::{ImageGenerator, TextGenerator},
    yt::{MetadataFetcher, TranscriptFetcher},
    ShortsPipeline,
};

pub struct AppState<M, C, T, I, S>
where
    M: MetadataFetcher + Send + Sync + 'static,
    C: TranscriptFetcher + Send + Sync + 'static,
    T: TextGenerator + Send + Sync + 'static,
    I: ImageGenerator + Send + Sync + 'static,
    S: HistoryStore + Send + Sync + 'static,
{
    pub pipeline: ShortsPipeline<M, C, T, I, S>,
    pub store: S,
}

/// Stylistic knobs accepted in the request body. Prompt construction does
/// not read them; they are validated and logged only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vibe {
    Ethereal,
    Grounded,
    Cosmic,
    Zen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    Balanced,
    Insightful,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub vibe: Option<Vibe>,
    pub length: Option<Length>,
    /// 0-100
    pub depth: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub struct ProcessRequest {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub config: Option<GenerationConfig>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    pub id: Uuid,
}

pub fn router<M, C, T, I, S>(state: Arc<AppState<M, C, T, I, S>>) -> Router
where
    M: MetadataFetcher + Send + Sync + 'static,
    C: TranscriptFetcher + Send + Sync + 'static,
    T: TextGenerator + Send + Sync + 'static,
    I: ImageGenerator + Send + Sync + 'static,
    S: HistoryStore + Send + Sync + 'static,
{
    Router::new()
        .route("/api/process", post(process_video::<M, C, T, I, S>))
        .route(
            "/api/videos",
            get(list_videos::<M, C, T, I, S>).delete(delete_video::<M, C, T, I, S>),
        )
        .route("/api/status", get(status))
        .layer(CorsLayer::permissive())
        .layer(Extension(state))
}

async fn process_video<M, C, T, I, S>(
    Extension(state): Extension<Arc<AppState<M, C, T, I, S>>>,
    Json(req): Json<ProcessRequest>,
) -> Response
where
    M: MetadataFetcher + Send + Sync + 'static,
    C: TranscriptFetcher + Send + Sync + 'static,
    T: TextGenerator + Send + Sync + 'static,
    I: ImageGenerator + Send + Sync + 'static,
    S: HistoryStore + Send + Sync + 'static,
{
    let Some(url) = req
        .url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
    else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "URL is required" })),
        )
            .into_response();
    };

    if let Some(config) = &req.config {
        tracing::debug!(?config, "Received generation config");
    }

    match state.pipeline.process(url).await {
        Ok(outcome) => Json(outcome).into_response(),
        Err(e) => {
            tracing::error!(error = ?e, url, "Error processing video");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to process video" })),
            )
                .into_response()
        }
    }
}

async fn list_videos<M, C, T, I, S>(
    Extension(state): Extension<Arc<AppState<M, C, T, I, S>>>,
) -> Response
where
    M: MetadataFetcher + Send + Sync + 'static,
    C: TranscriptFetcher + Send + Sync + 'static,
    T: TextGenerator + Send + Sync + 'static,
    I: ImageGenerator + Send + Sync + 'static,
    S: HistoryStore + Send + Sync + 'static,
{
    match state.store.list_records(defaults::HISTORY_PAGE_LIMIT).await {
        Ok(records) => Json(records).into_response(),
        Err(e) => {
            tracing::error!(error = ?e, "Failed to list history records");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to fetch videos" })),
            )
                .into_response()
        }
    }
}

async fn delete_video<M, C, T, I, S>(
    Extension(state): Extension<Arc<AppState<M, C, T, I, S>>>,
    Json(req): Json<DeleteRequest>,
) -> Response
where
    M: MetadataFetcher + Send + Sync + 'static,
    C: TranscriptFetcher + Send + Sync + 'static,
    T: TextGenerator + Send + Sync + 'static,
    I: ImageGenerator + Send + Sync + 'static,
    S: HistoryStore + Send + Sync + 'static,
{
    match state.store.delete_record(req.id).await {
        Ok(true) => Json(json!({ "success": true })).into_response(),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Record not found" })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = ?e, id = %req.id, "Failed to delete history record");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to delete video" })),
            )
                .into_response()
        }
    }
}

async fn status() -> Response {
    Json(json!({
        "status": "ok",
        "service": "shorts-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_request_accepts_config() {
        let req: ProcessRequest = serde_json::from_str(
            r#"{"url": "https://youtu.be/abc", "config": {"vibe": "cosmic", "length": "balanced", "depth": 70}}"#,
        )
        .unwrap();

        assert_eq!(req.url.as_deref(), Some("https://youtu.be/abc"));
        let config = req.config.unwrap();
        assert_eq!(config.vibe, Some(Vibe::Cosmic));
        assert_eq!(config.length, Some(Length::Balanced));
        assert_eq!(config.depth, Some(70));
    }

    #[test]
    fn process_request_tolerates_missing_fields() {
        let req: ProcessRequest = serde_json::from_str("{}").unwrap();
        assert!(req.url.is_none());
        assert!(req.config.is_none());
    }

    #[test]
    fn unknown_vibe_is_rejected() {
        let result = serde_json::from_str::<ProcessRequest>(
            r#"{"url": "x", "config": {"vibe": "chaotic"}}"#,
        );
        assert!(result.is_err());
    }
}
