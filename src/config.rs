/// Configuration for the Treble API client
///
/// Loads configuration from environment variables with sensible defaults.
use serde::Deserialize;

/// Base URL used when `TREBLE_API_BASE_URL` is not set
pub const DEFAULT_BASE_URL: &str = "http://localhost:9090/api/v1";

#[derive(Clone, Debug, Deserialize)]
pub struct ClientConfig {
    /// Versioned API base, no trailing slash
    pub base_url: String,
    /// Base for resolving relative media references
    pub files_base: String,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        let files_base = format!("{base_url}/files");
        Self {
            base_url,
            files_base,
        }
    }

    pub fn with_files_base(mut self, files_base: &str) -> Self {
        self.files_base = files_base.trim_end_matches('/').to_string();
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("TREBLE_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let mut config = Self::new(&base_url);
        if let Ok(files_base) = std::env::var("TREBLE_FILES_BASE_URL") {
            config = config.with_files_base(&files_base);
        }
        config
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ClientConfig::new("http://localhost:9090/api/v1/");
        assert_eq!(config.base_url, "http://localhost:9090/api/v1");
        assert_eq!(config.files_base, "http://localhost:9090/api/v1/files");
    }

    #[test]
    fn files_base_can_be_overridden() {
        let config = ClientConfig::new("http://localhost:9090/api/v1")
            .with_files_base("https://cdn.treble.dev/files/");
        assert_eq!(config.files_base, "https://cdn.treble.dev/files");
    }
}
