use reqwest::{Client, Method, StatusCode};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when talking to the Splitwise API
#[derive(Debug, Error)]
pub enum SplitwiseError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Any status outside 200/201, with the raw response body
    #[error("{body}")]
    ApiError { status: u16, body: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Splitwise API client
///
/// Every call is authenticated with the configured bearer token. The client
/// has no retry or caching; one method call is one HTTP request.
#[derive(Clone)]
pub struct SplitwiseClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl fmt::Debug for SplitwiseClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitwiseClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl SplitwiseClient {
    /// Create a new Splitwise client
    pub fn new(base_url: String, api_key: String) -> Result<Self, SplitwiseError> {
        let client = Client::builder().build()?;

        Ok(Self {
            base_url,
            api_key,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a GET against `path` with optional query parameters
    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, SplitwiseError> {
        self.call(Method::GET, path, None, query).await
    }

    /// Issue a POST against `path`, sending `body` as a JSON object if given
    pub async fn post(
        &self,
        path: &str,
        body: Option<&Map<String, Value>>,
    ) -> Result<Value, SplitwiseError> {
        self.call(Method::POST, path, body, &[]).await
    }

    async fn call(
        &self,
        method: Method,
        path: &str,
        body: Option<&Map<String, Value>>,
        query: &[(&str, String)],
    ) -> Result<Value, SplitwiseError> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);

        tracing::debug!("Calling Splitwise: {} {}", method, url);

        let mut request = self
            .client
            .request(method.clone(), &url)
            .bearer_auth(&self.api_key);

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if !is_success(status) {
            let body = response.text().await?;
            tracing::warn!("Splitwise {} {} failed: {} - {}", method, path, status, body);
            return Err(SplitwiseError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            SplitwiseError::InvalidResponse(format!("Failed to parse {} response: {}", path, e))
        })
    }
}

/// Only these statuses count as success; other 2xx codes are failures
#[inline]
fn is_success(status: StatusCode) -> bool {
    matches!(status, StatusCode::OK | StatusCode::CREATED)
}
