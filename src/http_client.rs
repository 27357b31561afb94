//! Shared HTTP plumbing for the Treble API client
//!
//! One configured `reqwest::Client` serves every operation: JSON default
//! headers, cookie store enabled so backend session cookies ride along on
//! every request. Every outgoing request and every response (or failure) is
//! logged; logging has no effect on return values.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::session::Session;

/// Shared client for the Treble REST API.
///
/// Cheap to clone; the underlying connection pool is shared between clones.
/// Each operation is an independently awaitable round trip with no ordering
/// or coordination relative to any other call.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
    session: Option<Session>,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .cookie_store(true)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            config,
            session: None,
        })
    }

    /// Build a client from `TREBLE_API_BASE_URL` / `TREBLE_USER_ID`
    pub fn from_env() -> Result<Self> {
        let mut client = Self::new(ClientConfig::from_env())?;
        client.session = Session::from_env();
        Ok(client)
    }

    /// Attach the logged-in user's session
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Fail fast with `NotLoggedIn` before any network I/O
    pub(crate) fn require_session(&self) -> Result<&Session> {
        self.session.as_ref().ok_or(ApiError::NotLoggedIn)
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    pub(crate) fn files_base(&self) -> &str {
        &self.config.files_base
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let request = request
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        debug!(method = %request.method(), url = %request.url(), "sending request");

        let response = self.http.execute(request).await.map_err(|e| {
            error!(error = %e, "request failed");
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status();
        debug!(status = status.as_u16(), "response received");

        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().to_string();
        let headers = format!("{:?}", response.headers());
        let body = response.text().await.unwrap_or_default();
        error!(%url, status = status.as_u16(), %body, %headers, "server returned error status");
        Err(ApiError::Http {
            status: status.as_u16(),
            body,
        })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.execute(self.http.get(self.url(path))).await?;
        decode(response).await
    }

    /// POST with no body, decoding the JSON response
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.execute(self.http.post(self.url(path))).await?;
        decode(response).await
    }

    /// PUT with no body, decoding the JSON response
    pub(crate) async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.execute(self.http.put(self.url(path))).await?;
        decode(response).await
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T> {
        let response = self
            .execute(self.http.post(self.url(path)).multipart(form))
            .await?;
        decode(response).await
    }

    pub(crate) async fn put_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T> {
        let response = self
            .execute(self.http.put(self.url(path)).multipart(form))
            .await?;
        decode(response).await
    }

    /// DELETE, resolving to `true` on any success status
    pub(crate) async fn delete(&self, path: &str) -> Result<bool> {
        self.execute(self.http.delete(self.url(path))).await?;
        Ok(true)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    serde_json::from_str(&body).map_err(|e| {
        error!(error = %e, "failed to decode response body");
        ApiError::Deserialization(e.to_string())
    })
}

/// Feed policy: log the failure and keep the aggregate view rendering.
///
/// Used by list-fetches whose callers compose a feed out of several sources;
/// a single failing source must not abort the whole page.
pub(crate) fn or_empty_feed<T>(result: Result<Vec<T>>, context: &'static str) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(err) => {
            warn!(context, error = %err, "feed fetch failed, returning empty list");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_session_fails_without_one() {
        let client = ApiClient::new(ClientConfig::new("http://localhost:9090/api/v1")).unwrap();
        assert!(matches!(
            client.require_session(),
            Err(ApiError::NotLoggedIn)
        ));
    }

    #[test]
    fn require_session_returns_attached_session() {
        let client = ApiClient::new(ClientConfig::new("http://localhost:9090/api/v1"))
            .unwrap()
            .with_session(Session::new("42"));
        assert_eq!(client.require_session().unwrap().user_id, "42");
    }

    #[test]
    fn or_empty_feed_swallows_errors() {
        let failed: Result<Vec<i64>> = Err(ApiError::Http {
            status: 500,
            body: String::new(),
        });
        assert!(or_empty_feed(failed, "test").is_empty());
        assert_eq!(or_empty_feed(Ok(vec![1, 2]), "test"), vec![1, 2]);
    }
}
