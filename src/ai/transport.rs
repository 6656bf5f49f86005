// External dependencies
use anyhow::{Context, Result};
use log::debug;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

// Internal dependencies
use crate::error::HowtoError;

/// A fully built POST request, independent of the HTTP library.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: Url,
    pub headers: Vec<(&'static str, String)>,
    pub body: Vec<u8>,
}

impl HttpRequest {
    pub fn json(url: Url, body: Vec<u8>) -> Self {
        Self {
            url,
            headers: vec![("Content-Type", "application/json".to_string())],
            body,
        }
    }

    pub fn header(mut self, name: &'static str, value: String) -> Self {
        self.headers.push((name, value));
        self
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Sends requests on behalf of the vendor clients.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

// ============================================================================
// reqwest transport
// ============================================================================

pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// A zero `timeout` means requests are never cut off.
    pub fn new(timeout: Duration) -> Result<Self> {
        let mut builder = Client::builder();
        if !timeout.is_zero() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        debug!("POST {} ({} bytes)", request.url, request.body.len());

        let mut builder = self.client.post(request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let response = builder
            .body(request.body)
            .send()
            .await
            .context("Failed to send request to AI vendor")?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .context("Failed to read AI vendor response")?
            .to_vec();

        debug!("Response status: {status}, {} bytes", body.len());
        Ok(HttpResponse { status, body })
    }
}

/// Sends the request and returns the body of a successful response.
/// Any non-2xx status is an error carrying the status text.
pub async fn fetch<T: HttpTransport>(transport: &T, request: HttpRequest) -> Result<Vec<u8>> {
    let response = transport.send(request).await?;

    if !response.status.is_success() {
        return Err(HowtoError::HttpStatus(response.status).into());
    }

    Ok(response.body)
}
