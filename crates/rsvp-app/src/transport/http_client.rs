//! reqwest-backed transport for the REST backend

use std::time::Duration;

use async_trait::async_trait;

use super::{ApiRequest, ApiResponse, HttpMethod, HttpTransport, TransportError};

/// Production transport: a pooled `reqwest::Client` against one base URL.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    base_url: String,
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport for `base_url` with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Setup(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.url(&request.path);
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        tracing::debug!(method = %request.method, %url, "sending request");

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Request(format!("{} {}: {}", request.method, url, e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Request(format!("reading body of {url}: {e}")))?;

        tracing::debug!(method = %request.method, %url, status, "response received");

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalised() {
        let transport =
            ReqwestTransport::new("http://localhost:8080/", Duration::from_secs(5)).unwrap();
        assert_eq!(transport.base_url(), "http://localhost:8080");
        assert_eq!(
            transport.url("/api/categories"),
            "http://localhost:8080/api/categories"
        );
    }
}
