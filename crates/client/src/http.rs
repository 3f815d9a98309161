//! Thin JSON-over-HTTP client for the booking service.
//!
//! Wraps [`reqwest`] with bearer-token handling and turns the service's
//! `{ "message": ..., "code": ... }` error bodies into [`ClientError`]s.

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Error body returned by the service.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// HTTP client bound to one service base URL.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self::with_client(client, config.api_url.clone()))
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// `GET {path}` and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> ClientResult<T> {
        let response = self.request(Method::GET, path, token).send().await?;
        Self::parse_response(response).await
    }

    /// `POST {path}` with a JSON body and decode the JSON response.
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .request(Method::POST, path, token)
            .json(body)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `PUT {path}` with a JSON body and decode the JSON response.
    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .request(Method::PUT, path, token)
            .json(body)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `POST {path}` without a body, discarding the response body.
    pub async fn post_empty(&self, path: &str, token: Option<&str>) -> ClientResult<()> {
        let response = self.request(Method::POST, path, token).send().await?;
        Self::check_status(response).await
    }

    /// `DELETE {path}`, discarding the response body.
    pub async fn delete(&self, path: &str, token: Option<&str>) -> ClientResult<()> {
        let response = self.request(Method::DELETE, path, token).send().await?;
        Self::check_status(response).await
    }

    // ---- private helpers ----

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        tracing::debug!(%method, path, authenticated = token.is_some(), "Sending request");
        let builder = self
            .client
            .request(method, format!("{}{}", self.base_url, path));
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or the mapped [`ClientError`] on failure.
    async fn ensure_success(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.message)
            .unwrap_or(text);
        tracing::warn!(status = status.as_u16(), %message, "Request failed");
        Err(ClientError::from_status(status, message))
    }

    async fn parse_response<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn check_status(response: Response) -> ClientResult<()> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}
