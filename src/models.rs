//! Resource models for the Treble REST API
//!
//! All models are camelCase on the wire and carry a flattened `extra` map so
//! backend-defined fields this layer does not interpret survive a round trip
//! untouched. `normalize_progress_update` is the single normalization step
//! applied to every progress update on ingress.

use chrono::NaiveDateTime;
use reqwest::multipart::Part;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{ApiError, Result};
use crate::media::resolve_media_url;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPlan {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: i64,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub learning_plan: Option<LearningPlan>,
    #[serde(default)]
    pub enrolled_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub completed_at: Option<NaiveDateTime>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default, deserialize_with = "string_or_seq")]
    pub media_urls: Option<Vec<String>>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub learning_plan_id: Option<i64>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default, deserialize_with = "string_or_seq")]
    pub media_urls: Option<Vec<String>>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A file attached to a multipart create/update request
#[derive(Clone, Debug)]
pub struct MediaUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl MediaUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub(crate) fn into_part(self) -> Result<Part> {
        Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.content_type)
            .map_err(|e| ApiError::InvalidRequest(format!("invalid MIME type: {e}")))
    }
}

/// Normalize a progress update into its canonical shape.
///
/// Resolves the singular and list media references, backfills `media_url`
/// from the first list entry when only the list is present, and backfills
/// `caption` from `content`. Pure and idempotent, so repeated application
/// is safe.
pub fn normalize_progress_update(files_base: &str, mut update: ProgressUpdate) -> ProgressUpdate {
    update.media_url = resolve_media_url(files_base, update.media_url.as_deref());

    if let Some(urls) = update.media_urls.take() {
        let resolved: Vec<String> = urls
            .iter()
            .filter_map(|url| resolve_media_url(files_base, Some(url)))
            .collect();
        if update.media_url.is_none() {
            update.media_url = resolved.first().cloned();
        }
        update.media_urls = Some(resolved);
    }

    if update.caption.as_deref().map_or(true, str::is_empty) {
        if let Some(content) = &update.content {
            update.caption = Some(content.clone());
        }
    }

    update
}

/// Accept either a bare string or a list of strings on the wire.
fn string_or_seq<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    let value = Option::<OneOrMany>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        OneOrMany::One(url) => vec![url],
        OneOrMany::Many(urls) => urls,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILES_BASE: &str = "http://localhost:9090/api/v1/files";

    fn update(json: Value) -> ProgressUpdate {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn media_url_is_backfilled_from_list() {
        let raw = update(serde_json::json!({"id": 1, "mediaUrls": ["a.png"]}));
        let normalized = normalize_progress_update(FILES_BASE, raw);
        assert_eq!(
            normalized.media_url.as_deref(),
            Some("http://localhost:9090/api/v1/files/a.png")
        );
        assert_eq!(
            normalized.media_urls,
            Some(vec!["http://localhost:9090/api/v1/files/a.png".to_string()])
        );
    }

    #[test]
    fn caption_is_backfilled_from_content() {
        let raw = update(serde_json::json!({"id": 1, "content": "hi"}));
        let normalized = normalize_progress_update(FILES_BASE, raw);
        assert_eq!(normalized.caption.as_deref(), Some("hi"));
        assert_eq!(normalized.content.as_deref(), Some("hi"));
    }

    #[test]
    fn existing_caption_is_kept() {
        let raw = update(serde_json::json!({"id": 1, "caption": "kept", "content": "other"}));
        let normalized = normalize_progress_update(FILES_BASE, raw);
        assert_eq!(normalized.caption.as_deref(), Some("kept"));
    }

    #[test]
    fn normalization_is_idempotent() {
        let raw = update(serde_json::json!({
            "id": 1,
            "content": "practice log",
            "mediaUrls": ["a.png", "https://cdn.example.com/b.png"]
        }));
        let once = normalize_progress_update(FILES_BASE, raw);
        let twice = normalize_progress_update(FILES_BASE, once.clone());
        assert_eq!(once.media_url, twice.media_url);
        assert_eq!(once.media_urls, twice.media_urls);
        assert_eq!(once.caption, twice.caption);
    }

    #[test]
    fn update_without_media_or_content_is_unchanged() {
        let raw = update(serde_json::json!({"id": 7, "caption": "done"}));
        let normalized = normalize_progress_update(FILES_BASE, raw);
        assert_eq!(normalized.media_url, None);
        assert_eq!(normalized.media_urls, None);
        assert_eq!(normalized.caption.as_deref(), Some("done"));
    }

    #[test]
    fn media_urls_accepts_a_bare_string() {
        let raw = update(serde_json::json!({"id": 1, "mediaUrls": "solo.png"}));
        assert_eq!(raw.media_urls, Some(vec!["solo.png".to_string()]));
    }

    #[test]
    fn unknown_fields_round_trip_through_extra() {
        let raw = update(serde_json::json!({
            "id": 1,
            "likeCount": 3,
            "learningPlanTitle": "Jazz Guitar"
        }));
        assert_eq!(raw.extra["likeCount"], 3);
        let back = serde_json::to_value(&raw).unwrap();
        assert_eq!(back["learningPlanTitle"], "Jazz Guitar");
    }
}
