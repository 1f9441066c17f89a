//! Private HTTP client for WattBox device communication
//!
//! This crate provides a minimal HTTP client for the WattBox CGI interface.
//! Every request is a single GET carrying the fixed header set the firmware
//! expects; failures are classified into the few cases callers care about.

mod error;

pub use error::TransportError;

use std::time::Duration;

use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONNECTION, CONTENT_TYPE, HOST,
    USER_AGENT,
};

/// Raw response returned by the device
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Undecoded response body
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Body as text, replacing invalid UTF-8 sequences
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Transport configuration
///
/// Unset timeouts leave reqwest's own defaults in place.
#[derive(Debug, Clone, Default)]
pub struct HttpClientConfig {
    /// Timeout for establishing the TCP connection
    pub connect_timeout: Option<Duration>,
    /// Timeout for the whole request
    pub timeout: Option<Duration>,
}

/// A minimal HTTP client for WattBox device communication
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a client from the given configuration
    pub fn with_config(config: &HttpClientConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(TransportError::Build)?;
        Ok(Self { client })
    }

    /// Wrap an existing reqwest client
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Issue one GET request and return the raw response
    ///
    /// # Arguments
    /// * `url` - Fully formatted request URL
    /// * `host` - Value for the `Host` header
    /// * `authorization` - Value for the `Authorization` header
    pub async fn get(
        &self,
        url: &str,
        host: &str,
        authorization: &str,
    ) -> Result<RawResponse, TransportError> {
        let headers = request_headers(host, authorization)?;

        let response = self
            .client
            .get(url)
            .headers(headers)
            .send()
            .await
            .map_err(TransportError::classify)?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url, status = status.as_u16(), "device returned error status");
            return Err(TransportError::Status(status.as_u16()));
        }

        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(TransportError::classify)?
            .to_vec();

        Ok(RawResponse {
            status: status.as_u16(),
            headers,
            body,
        })
    }
}

/// Build the fixed header set sent with every request
fn request_headers(host: &str, authorization: &str) -> Result<HeaderMap, TransportError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(authorization)
            .map_err(|_| TransportError::InvalidHeader("Authorization"))?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(HeaderName::from_static("keep-alive"), HeaderValue::from_static("300"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(USER_AGENT, HeaderValue::from_static("APP"));
    headers.insert(
        HOST,
        HeaderValue::from_str(host).map_err(|_| TransportError::InvalidHeader("Host"))?,
    );
    Ok(headers)
}
