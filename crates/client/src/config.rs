use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ClientError, ClientResult};

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the booking service, without a trailing slash.
    pub api_url: String,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// Where the token is persisted. `None` keeps it in memory only.
    pub storage_path: Option<PathBuf>,
}

impl ClientConfig {
    /// Build a configuration pointing at `api_url` with defaults elsewhere.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(30),
            storage_path: None,
        }
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                        | Default                 |
    /// |--------------------------------|-------------------------|
    /// | `STUDIO_API_URL`               | `http://localhost:8080` |
    /// | `STUDIO_REQUEST_TIMEOUT_SECS`  | `30`                    |
    /// | `STUDIO_STORAGE_PATH`          | unset (memory only)     |
    pub fn from_env() -> ClientResult<Self> {
        dotenvy::dotenv().ok();

        let api_url =
            std::env::var("STUDIO_API_URL").unwrap_or_else(|_| "http://localhost:8080".into());

        let timeout_secs: u64 = std::env::var("STUDIO_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .map_err(|e| {
                ClientError::Config(format!("STUDIO_REQUEST_TIMEOUT_SECS must be a valid u64: {e}"))
            })?;

        let storage_path = std::env::var("STUDIO_STORAGE_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            request_timeout: Duration::from_secs(timeout_secs),
            storage_path,
            ..Self::new(api_url)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_strips_trailing_slash() {
        let config = ClientConfig::new("http://localhost:8080/");
        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.storage_path.is_none());
    }
}
