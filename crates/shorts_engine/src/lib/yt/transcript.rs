//! Caption-track transcript retrieval.
//!
//! YouTube exposes caption tracks inside a JSON blob embedded in the watch
//! page. We pull `captionTracks` out of that blob, pick an English track if
//! one exists, fetch its timedtext XML and flatten it to plain text.

use std::{ops::Deref, sync::LazyLock};

use regex::Regex;
use serde::Deserialize;

use crate::{error::Error, yt::TranscriptFetcher};

static CAPTION_TRACKS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""captionTracks":(\[.*?\])"#).unwrap());

static TEXT_NODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<text[^>]*>(.*?)</text>").unwrap());

pub struct CaptionScraper(pub reqwest::Client);

impl Default for CaptionScraper {
    fn default() -> Self {
        Self(reqwest::Client::new())
    }
}

impl Deref for CaptionScraper {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug, Deserialize)]
struct CaptionTrack {
    #[serde(rename = "baseUrl")]
    base_url: String,
    #[serde(rename = "languageCode")]
    language_code: Option<String>,
}

impl TranscriptFetcher for CaptionScraper {
    type Error = Error;

    async fn fetch_transcript(&self, video_url: &str) -> Result<String, Self::Error> {
        let html = self
            .get(video_url)
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await?
            .text()
            .await?;

        let tracks_json = CAPTION_TRACKS_RE
            .captures(&html)
            .and_then(|c| c.get(1))
            .ok_or(Error::NoCaptions)?;
        let tracks: Vec<CaptionTrack> = serde_json::from_str(tracks_json.as_str())?;

        let track = tracks
            .iter()
            .find(|t| {
                t.language_code
                    .as_deref()
                    .is_some_and(|lang| lang.starts_with("en"))
            })
            .or_else(|| tracks.first())
            .ok_or(Error::NoCaptions)?;

        let xml = self.get(&track.base_url).send().await?.text().await?;

        Ok(timedtext_to_plain(&xml))
    }
}

/// Flattens a timedtext document to one whitespace-joined string.
fn timedtext_to_plain(xml: &str) -> String {
    let mut parts = Vec::new();
    for cap in TEXT_NODE_RE.captures_iter(xml) {
        let text = decode_entities(cap[1].trim());
        if !text.is_empty() {
            parts.push(text);
        }
    }
    parts.join(" ")
}

/// Timedtext payloads are double-encoded, so `&amp;` goes first.
fn decode_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_timedtext_to_plain_text() {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<transcript>
  <text start="0.0" dur="2.5">the journey begins</text>
  <text start="2.5" dur="3.1">with a single
breath</text>
  <text start="5.6" dur="1.0"></text>
</transcript>"#;

        assert_eq!(
            timedtext_to_plain(xml),
            "the journey begins with a single\nbreath"
        );
    }

    #[test]
    fn decodes_double_encoded_entities() {
        assert_eq!(decode_entities("it&amp;#39;s here"), "it's here");
        assert_eq!(decode_entities("&quot;stillness&quot;"), "\"stillness\"");
        assert_eq!(decode_entities("a &amp; b"), "a & b");
    }

    #[test]
    fn caption_tracks_regex_extracts_embedded_json() {
        let html = r#"<script>var ytInitialPlayerResponse = {"captions":{"playerCaptionsTracklistRenderer":{"captionTracks":[{"baseUrl":"https://www.youtube.com/api/timedtext?v=abc&lang=en","languageCode":"en"}]}}};</script>"#;

        let caps = CAPTION_TRACKS_RE.captures(html).expect("should match");
        let tracks: Vec<CaptionTrack> = serde_json::from_str(caps.get(1).unwrap().as_str())
            .expect("embedded json should parse");
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].language_code.as_deref(), Some("en"));
        assert!(tracks[0].base_url.contains("timedtext?v=abc&lang=en"));
    }
}
