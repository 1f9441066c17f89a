use std::sync::Arc;

use http_client::{HttpClient, HttpClientConfig, RawResponse};
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use tokio::task::JoinHandle;
use wattbox_parser::{BasicStatus, Decoded, WattBoxInfo};

use crate::auth::AuthToken;
use crate::command::Command;
use crate::error::{ApiError, Result};
use crate::listeners::{ListenerId, Listeners};
use crate::network::NetworkPath;
use crate::response::Response;

/// A client for one WattBox device
///
/// Every operation issues exactly one GET against the device's CGI interface
/// and decodes the XML answer. Nothing is retried or cached, and concurrent
/// calls are not ordered relative to each other.
///
/// The client is cheap to clone; clones share the status listeners and the
/// status poller.
///
/// ```rust,no_run
/// use wattbox_api::WattBoxClient;
///
/// # async fn run() -> wattbox_api::Result<()> {
/// let client = WattBoxClient::new("technician", "secret", "192.168.1.20/")?;
/// let status = client.power_on(3).await?;
/// if let Some(status) = status.record() {
///     println!("outlets: {:?}", status.outlets());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WattBoxClient {
    pub(crate) inner: Arc<Inner>,
}

#[derive(Debug)]
pub(crate) struct Inner {
    http: HttpClient,
    auth: AuthToken,
    path: NetworkPath,
    pub(crate) listeners: Listeners,
    pub(crate) poller: Mutex<Option<JoinHandle<()>>>,
}

impl Drop for Inner {
    fn drop(&mut self) {
        if let Some(handle) = self.poller.get_mut().take() {
            handle.abort();
        }
    }
}

impl WattBoxClient {
    /// Create a client with default transport settings
    ///
    /// # Arguments
    /// * `username` - Device account name
    /// * `password` - Device account password
    /// * `address` - Device address, e.g. `"192.168.1.20/"` or
    ///   `"http://192.168.1.20/"`; see [`NetworkPath::normalize`]
    pub fn new(username: &str, password: &str, address: &str) -> Result<Self> {
        Self::builder(username, password, address).build()
    }

    /// Start building a client with custom transport settings
    pub fn builder(username: &str, password: &str, address: &str) -> ClientBuilder {
        ClientBuilder {
            auth: AuthToken::new(username, password),
            path: NetworkPath::normalize(address),
            http_config: HttpClientConfig::default(),
            http_client: None,
        }
    }

    /// The normalized device base URL
    pub fn network_path(&self) -> &NetworkPath {
        &self.inner.path
    }

    /// The `Authorization` header value sent with every request
    pub fn auth_token(&self) -> &AuthToken {
        &self.inner.auth
    }

    /// Switch an outlet on
    pub async fn power_on(&self, outlet: i32) -> Result<Response<BasicStatus>> {
        self.send_command(outlet, Command::On).await
    }

    /// Switch an outlet off
    pub async fn power_off(&self, outlet: i32) -> Result<Response<BasicStatus>> {
        self.send_command(outlet, Command::Off).await
    }

    /// Power-cycle an outlet
    pub async fn power_reset(&self, outlet: i32) -> Result<Response<BasicStatus>> {
        self.send_command(outlet, Command::Reset).await
    }

    /// Power-cycle an outlet.
    ///
    /// The timeout is accepted for API compatibility but is not sent to the
    /// device; the reset uses the device's own cycle time.
    pub async fn power_reset_timeout(
        &self,
        outlet: i32,
        _timeout_seconds: u32,
    ) -> Result<Response<BasicStatus>> {
        self.send_command(outlet, Command::Reset).await
    }

    /// Enable auto-reboot for the whole device
    pub async fn auto_reboot_on(&self) -> Result<Response<BasicStatus>> {
        self.send_command(0, Command::AutoRebootOn).await
    }

    /// Disable auto-reboot for the whole device
    pub async fn auto_reboot_off(&self) -> Result<Response<BasicStatus>> {
        self.send_command(0, Command::AutoRebootOff).await
    }

    /// Send a raw command for an outlet
    pub async fn send_command(
        &self,
        outlet: i32,
        command: Command,
    ) -> Result<Response<BasicStatus>> {
        tracing::debug!(outlet, command = ?command, "sending outlet command");
        self.fetch(self.inner.path.command_url(outlet, command)).await
    }

    /// Fetch the status of all outlets.
    ///
    /// Uses the `-1` sentinel outlet, so no outlet changes state.
    pub async fn get_status(&self) -> Result<Response<BasicStatus>> {
        self.fetch(self.inner.path.status_url()).await
    }

    /// Fetch device metadata from `wattbox_info.xml`
    pub async fn get_info(&self) -> Result<Response<WattBoxInfo>> {
        self.fetch(self.inner.path.info_url()).await
    }

    /// Register a listener for status updates from the poller
    pub fn on_status<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&Response<BasicStatus>) + Send + Sync + 'static,
    {
        self.inner.listeners.add_status(Arc::new(listener))
    }

    /// Register a listener for poller errors
    pub fn on_error<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&ApiError) + Send + Sync + 'static,
    {
        self.inner.listeners.add_error(Arc::new(listener))
    }

    /// Remove a previously registered listener.
    ///
    /// Returns `false` when the id was not registered.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        self.inner.listeners.remove(id)
    }

    /// Issue one request and decode the body into `T`
    async fn fetch<T: DeserializeOwned>(&self, url: String) -> Result<Response<T>> {
        let host = self
            .inner
            .path
            .host()
            .ok_or_else(|| ApiError::InvalidAddress(self.inner.path.to_string()))?;

        let raw = self
            .inner
            .http
            .get(&url, host, self.inner.auth.as_str())
            .await
            .map_err(|e| {
                tracing::debug!(url = %url, error = %e, "request failed");
                ApiError::from(e)
            })?;

        let RawResponse {
            status,
            headers,
            body,
        } = raw;

        match wattbox_parser::decode::<T>(body) {
            Decoded::Record(record) => Ok(Response::Record(record)),
            Decoded::RawFallback(body) => {
                tracing::warn!(url = %url, "response body is not text, returning raw response");
                Ok(Response::Raw(RawResponse {
                    status,
                    headers,
                    body,
                }))
            }
            Decoded::Failed(e) => {
                tracing::debug!(url = %url, error = %e, "failed to decode response");
                Err(ApiError::Decode(e))
            }
        }
    }
}

/// Builder for [`WattBoxClient`]
///
/// The credentials are turned into the auth token as soon as the builder is
/// created; the plaintext is not stored.
#[derive(Debug)]
pub struct ClientBuilder {
    auth: AuthToken,
    path: NetworkPath,
    http_config: HttpClientConfig,
    http_client: Option<reqwest::Client>,
}

impl ClientBuilder {
    /// Transport settings used when no client is injected
    pub fn http_config(mut self, config: HttpClientConfig) -> Self {
        self.http_config = config;
        self
    }

    /// Use an existing reqwest client; takes precedence over `http_config`
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<WattBoxClient> {
        let http = match self.http_client {
            Some(client) => HttpClient::from_client(client),
            None => HttpClient::with_config(&self.http_config)?,
        };

        Ok(WattBoxClient {
            inner: Arc::new(Inner {
                http,
                auth: self.auth,
                path: self.path,
                listeners: Listeners::default(),
                poller: Mutex::new(None),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = WattBoxClient::new("technician", "technician22", "192.168.11.244/").unwrap();

        assert_eq!(client.network_path().as_str(), "http://192.168.11.244");
        assert_eq!(
            client.auth_token().as_str(),
            "Basic dGVjaG5pY2lhbjp0ZWNobmljaWFuMjI="
        );
    }

    #[test]
    fn test_builder_with_injected_client() {
        let client = WattBoxClient::builder("tech", "pw1", "https://pdu.local/")
            .http_client(reqwest::Client::new())
            .build()
            .unwrap();

        assert_eq!(client.network_path().as_str(), "https://pdu.local");
    }

    #[test]
    fn test_clones_share_listeners() {
        let client = WattBoxClient::new("tech", "pw1", "10.0.0.5/").unwrap();
        let clone = client.clone();

        let id = client.on_error(|_| {});
        assert!(clone.remove_listener(id));
    }

    #[tokio::test]
    async fn test_missing_host_is_invalid_address() {
        let client = WattBoxClient::new("tech", "pw1", "http://10.0.0.5").unwrap();
        let result = client.get_info().await;
        assert!(matches!(result, Err(ApiError::InvalidAddress(_))));
    }
}
