//! Learning plan operations
//!
//! Create and update send a multipart body carrying the JSON-serialized plan
//! metadata under the `learningPlan` field plus an optional `videoFile`
//! attachment; the metadata type is caller-defined and passed through
//! opaquely.

use reqwest::multipart::{Form, Part};
use serde::Serialize;

use crate::error::{ApiError, Result};
use crate::http_client::ApiClient;
use crate::models::{LearningPlan, MediaUpload};

fn plan_form<P: Serialize>(plan: &P, video: Option<MediaUpload>) -> Result<Form> {
    let metadata = serde_json::to_string(plan)?;
    let mut form = Form::new().part(
        "learningPlan",
        Part::text(metadata)
            .mime_str("application/json")
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?,
    );
    if let Some(video) = video {
        form = form.part("videoFile", video.into_part()?);
    }
    Ok(form)
}

impl ApiClient {
    pub async fn list_learning_plans(&self) -> Result<Vec<LearningPlan>> {
        self.get_json("/learning-plans").await
    }

    pub async fn get_learning_plan(&self, id: i64) -> Result<LearningPlan> {
        self.get_json(&format!("/learning-plans/{id}")).await
    }

    pub async fn create_learning_plan<P: Serialize>(
        &self,
        plan: &P,
        video: Option<MediaUpload>,
    ) -> Result<LearningPlan> {
        self.post_multipart("/learning-plans", plan_form(plan, video)?)
            .await
    }

    pub async fn update_learning_plan<P: Serialize>(
        &self,
        id: i64,
        plan: &P,
        video: Option<MediaUpload>,
    ) -> Result<LearningPlan> {
        self.put_multipart(&format!("/learning-plans/{id}"), plan_form(plan, video)?)
            .await
    }

    /// Resolves to `true` on success
    pub async fn delete_learning_plan(&self, id: i64) -> Result<bool> {
        self.delete(&format!("/learning-plans/{id}")).await
    }
}
