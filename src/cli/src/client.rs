//! Fetching application data from the management service.

use async_trait::async_trait;
use mctl_core::error::{CtlError, Result};

use crate::auth::AuthToken;

/// Status code and complete body of a fetch.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Something that can answer a GET for a path under the service base URL.
#[async_trait]
pub trait ApplicationSource: Send + Sync {
    /// Full URL that `path` resolves to, for diagnostics.
    fn url_for(&self, path: &str) -> String;

    /// Issue a GET for `path` and read the whole body.
    async fn fetch(&self, path: &str) -> Result<FetchResponse>;
}

/// [`ApplicationSource`] backed by HTTP.
pub struct HttpSource {
    base_url: String,
    token: AuthToken,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>, token: AuthToken) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
            client: reqwest::Client::new(),
        }
    }

    fn request(&self, path: &str) -> reqwest::RequestBuilder {
        self.token.decorate(self.client.get(self.url_for(path)))
    }
}

#[async_trait]
impl ApplicationSource for HttpSource {
    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn fetch(&self, path: &str) -> Result<FetchResponse> {
        let url = self.url_for(path);
        tracing::debug!("HTTP GET {}", url);

        let response = self
            .request(path)
            .send()
            .await
            .map_err(|e| CtlError::TransportFailure(format!("GET {url}: {e}")))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| CtlError::TransportFailure(format!("reading body of {url}: {e}")))?;
        tracing::debug!(status, bytes = body.len(), "response received");

        Ok(FetchResponse {
            status,
            body: body.to_vec(),
        })
    }
}
