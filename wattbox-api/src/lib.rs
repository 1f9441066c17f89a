//! Async client for WattBox power distribution units
//!
//! This crate controls a WattBox over its HTTP/CGI interface: outlet power
//! commands, auto-reboot, status and device info, plus optional recurring
//! status polling with listener callbacks. It uses the private `http-client`
//! crate for transport and `wattbox-parser` for the XML responses.
//!
//! # Outlet control
//!
//! ```rust,no_run
//! use wattbox_api::WattBoxClient;
//!
//! # async fn run() -> wattbox_api::Result<()> {
//! let client = WattBoxClient::new("technician", "secret", "192.168.1.20/")?;
//!
//! client.power_off(2).await?;
//! client.power_reset(4).await?;
//!
//! let info = client.get_info().await?;
//! if let Some(info) = info.record() {
//!     println!("{:?} drawing {:?} W", info.host_name, info.power());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Status polling
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use wattbox_api::WattBoxClient;
//!
//! # async fn run() -> wattbox_api::Result<()> {
//! let client = WattBoxClient::new("technician", "secret", "192.168.1.20/")?;
//!
//! client.on_status(|status| println!("{:?}", status.record()));
//! client.on_error(|error| eprintln!("{}", error));
//! client.subscribe_status(Duration::from_secs(5))?;
//!
//! // ...
//!
//! client.unsubscribe_status();
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod command;
pub mod error;
pub mod listeners;
pub mod logging;
pub mod network;
mod poller;
pub mod response;

pub use auth::AuthToken;
pub use client::{ClientBuilder, WattBoxClient};
pub use command::Command;
pub use error::{ApiError, Result};
pub use listeners::ListenerId;
pub use network::{NetworkPath, STATUS_SENTINEL_OUTLET};
pub use response::Response;

pub use http_client::{HttpClientConfig, RawResponse};
pub use wattbox_parser::{BasicStatus, Outlet, OutletState, WattBoxInfo};
