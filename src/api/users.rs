//! User operations

use crate::error::Result;
use crate::http_client::ApiClient;
use crate::models::User;

impl ApiClient {
    pub async fn get_user(&self, id: i64) -> Result<User> {
        self.get_json(&format!("/users/{id}")).await
    }
}
