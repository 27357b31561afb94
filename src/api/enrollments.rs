//! Enrollment operations
//!
//! All enrollment operations act on behalf of the logged-in user; each one
//! checks the session before building a request and carries the user id as a
//! `userId` query parameter.

use urlencoding::encode;

use crate::error::Result;
use crate::http_client::ApiClient;
use crate::models::Enrollment;

impl ApiClient {
    /// Enrollments of the logged-in user
    pub async fn my_enrollments(&self) -> Result<Vec<Enrollment>> {
        let session = self.require_session()?;
        let path = format!(
            "/enrollments/my-learning-plans?userId={}",
            encode(&session.user_id)
        );
        self.get_json(&path).await
    }

    pub async fn enroll(&self, learning_plan_id: i64) -> Result<Enrollment> {
        let session = self.require_session()?;
        let path = format!(
            "/enrollments/{learning_plan_id}?userId={}",
            encode(&session.user_id)
        );
        self.post_empty(&path).await
    }

    /// Resolves to `true` on success
    pub async fn unenroll(&self, learning_plan_id: i64) -> Result<bool> {
        let session = self.require_session()?;
        let path = format!(
            "/enrollments/{learning_plan_id}?userId={}",
            encode(&session.user_id)
        );
        self.delete(&path).await
    }

    pub async fn mark_enrollment_completed(&self, learning_plan_id: i64) -> Result<Enrollment> {
        let session = self.require_session()?;
        let path = format!(
            "/enrollments/{learning_plan_id}/complete?userId={}",
            encode(&session.user_id)
        );
        self.put_empty(&path).await
    }
}
