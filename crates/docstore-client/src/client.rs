//! Document store HTTP client implementation

use std::time::Duration;

use bytes::Bytes;
use reqwest::{multipart, Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, instrument};
use url::Url;

use crate::error::{ClientError, Result};

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default connection timeout
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// URL-encode a document name for use as a path segment.
///
/// Reserved characters that would otherwise change the request path must
/// not pass through literally.
fn encode_path_segment(name: &str) -> String {
    name.replace('%', "%25").replace('/', "%2F")
}

/// Success body of an upload
#[derive(Debug, Deserialize)]
struct UploadMessage {
    message: String,
}

/// Error body returned by the server: a single `error` field
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Document store REST API client
#[derive(Debug, Clone)]
pub struct DocStoreClient {
    client: Client,
    base_url: Url,
}

impl DocStoreClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the server (e.g., "http://localhost:5000")
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(base_url, DEFAULT_TIMEOUT, DEFAULT_CONNECT_TIMEOUT)
    }

    /// Create a new client with custom timeouts
    pub fn with_config(
        base_url: &str,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        let base_url = Url::parse(base_url)?;

        Ok(Self { client, base_url })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Check server health
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<String> {
        let url = self.base_url.join("/health")?;
        let response = self.client.get(url).send().await?;

        if response.status().is_success() {
            Ok(response.text().await?)
        } else {
            Err(self.extract_error(response).await)
        }
    }

    /// Upload a document, returning the server's confirmation message
    #[instrument(skip(self, content))]
    pub async fn upload(&self, name: &str, content: impl Into<Vec<u8>>) -> Result<String> {
        let url = self.base_url.join("/documents")?;
        debug!("Uploading document to {}", url);

        let part = multipart::Part::bytes(content.into()).file_name(name.to_string());
        let form = multipart::Form::new().part("file", part);

        let response = self.client.post(url).multipart(form).send().await?;

        if response.status().is_success() {
            let body: UploadMessage = response.json().await?;
            Ok(body.message)
        } else {
            Err(self.extract_error(response).await)
        }
    }

    /// Fetch a document's full content
    #[instrument(skip(self))]
    pub async fn fetch(&self, name: &str) -> Result<Bytes> {
        let url = self
            .base_url
            .join(&format!("/documents/{}", encode_path_segment(name)))?;
        debug!("Fetching document from {}", url);

        let response = self.client.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::DocumentNotFound(name.to_string()));
        }
        if !response.status().is_success() {
            return Err(self.extract_error(response).await);
        }

        Ok(response.bytes().await?)
    }

    /// Build a client error from a non-success response
    async fn extract_error(&self, response: reqwest::Response) -> ClientError {
        let status = response.status().as_u16();
        match response.json::<ErrorBody>().await {
            Ok(body) => ClientError::server_error(status, body.error),
            Err(_) => ClientError::server_error(status, "Unknown server error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_segment_encoding_keeps_one_segment() {
        assert_eq!(encode_path_segment("plain.txt"), "plain.txt");
        assert_eq!(encode_path_segment("a/b"), "a%2Fb");
        assert_eq!(encode_path_segment("50%.txt"), "50%25.txt");
    }
}
