//! Progress update operations
//!
//! Every returned update passes through `normalize_progress_update` on
//! ingress, so callers always see the canonical shape: absolute media URLs,
//! `media_url` backfilled from the list, `caption` backfilled from
//! `content`. The general list and the per-user list are feed operations;
//! the my-updates variant is not and propagates failures.

use reqwest::multipart::Form;

use crate::error::Result;
use crate::http_client::{or_empty_feed, ApiClient};
use crate::models::{normalize_progress_update, MediaUpload, ProgressUpdate};

/// Typed multipart payload for creating or updating a progress update
#[derive(Clone, Debug, Default)]
pub struct ProgressUpdateDraft {
    pub content: Option<String>,
    pub learning_plan_id: Option<i64>,
    pub media: Vec<MediaUpload>,
    /// Only meaningful on update; the backend defaults to keeping media
    pub keep_existing_media: Option<bool>,
}

impl ProgressUpdateDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn learning_plan(mut self, learning_plan_id: i64) -> Self {
        self.learning_plan_id = Some(learning_plan_id);
        self
    }

    pub fn media(mut self, file: MediaUpload) -> Self {
        self.media.push(file);
        self
    }

    pub fn keep_existing_media(mut self, keep: bool) -> Self {
        self.keep_existing_media = Some(keep);
        self
    }

    fn into_form(self) -> Result<Form> {
        let mut form = Form::new();
        if let Some(content) = self.content {
            form = form.text("content", content);
        }
        if let Some(id) = self.learning_plan_id {
            form = form.text("learningPlanId", id.to_string());
        }
        for file in self.media {
            form = form.part("media", file.into_part()?);
        }
        if let Some(keep) = self.keep_existing_media {
            form = form.text("keepExistingMedia", keep.to_string());
        }
        Ok(form)
    }
}

impl ApiClient {
    pub async fn create_progress_update(
        &self,
        draft: ProgressUpdateDraft,
    ) -> Result<ProgressUpdate> {
        let update = self
            .post_multipart("/progress-updates", draft.into_form()?)
            .await?;
        Ok(normalize_progress_update(self.files_base(), update))
    }

    /// Feed operation: resolves to an empty list on failure
    pub async fn list_progress_updates(&self) -> Vec<ProgressUpdate> {
        or_empty_feed(
            self.fetch_progress_updates("/progress-updates").await,
            "progress updates",
        )
    }

    /// Updates of the logged-in user; unlike the feeds, failures propagate
    pub async fn my_progress_updates(&self) -> Result<Vec<ProgressUpdate>> {
        let session = self.require_session()?;
        let path = format!(
            "/progress-updates/my-updates?userId={}",
            urlencoding::encode(&session.user_id)
        );
        self.fetch_progress_updates(&path).await
    }

    /// Feed operation: resolves to an empty list on failure
    pub async fn progress_updates_for_user(&self, user_id: i64) -> Vec<ProgressUpdate> {
        let path = format!("/progress-updates/user/{user_id}");
        or_empty_feed(
            self.fetch_progress_updates(&path).await,
            "user progress updates",
        )
    }

    async fn fetch_progress_updates(&self, path: &str) -> Result<Vec<ProgressUpdate>> {
        let updates: Vec<ProgressUpdate> = self.get_json(path).await?;
        Ok(updates
            .into_iter()
            .map(|update| normalize_progress_update(self.files_base(), update))
            .collect())
    }

    pub async fn get_progress_update(&self, id: i64) -> Result<ProgressUpdate> {
        let update = self.get_json(&format!("/progress-updates/{id}")).await?;
        Ok(normalize_progress_update(self.files_base(), update))
    }

    pub async fn update_progress_update(
        &self,
        id: i64,
        draft: ProgressUpdateDraft,
    ) -> Result<ProgressUpdate> {
        let update = self
            .put_multipart(&format!("/progress-updates/{id}"), draft.into_form()?)
            .await?;
        Ok(normalize_progress_update(self.files_base(), update))
    }

    /// Resolves to `true` on success
    pub async fn delete_progress_update(&self, id: i64) -> Result<bool> {
        self.delete(&format!("/progress-updates/{id}")).await
    }
}
