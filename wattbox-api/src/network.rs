//! Network path normalization and request URL formatting.

use std::fmt;

use crate::command::Command;

/// Outlet index the status request uses so that no real outlet is touched
pub const STATUS_SENTINEL_OUTLET: i32 = -1;

/// Normalized base URL of a WattBox device.
///
/// Computed once from the user-supplied address. Everything after the last
/// `/` of the input is dropped, then `http://` is prepended when the input
/// carried no scheme. Addresses are therefore expected with a trailing
/// slash (`"192.168.1.20/"`); without one the truncation eats into the host
/// (`"192.168.1.20"` becomes `"http://"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkPath(String);

impl NetworkPath {
    /// Normalize a user-supplied device address
    pub fn normalize(input: &str) -> Self {
        let truncated = match input.rfind('/') {
            Some(pos) => &input[..pos],
            None => "",
        };

        if input.starts_with("http://") || input.starts_with("https://") {
            Self(truncated.to_string())
        } else {
            Self(format!("http://{}", truncated))
        }
    }

    /// The normalized base URL
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Host` header: the text between `//` and the next `/`.
    ///
    /// Returns `None` when the path has no `//`.
    pub fn host(&self) -> Option<&str> {
        self.0.split("//").nth(1)?.split('/').next()
    }

    /// URL for an outlet command
    pub fn command_url(&self, outlet: i32, command: Command) -> String {
        format!(
            "{}/control.cgi?outlet={}&command={}",
            self.0,
            outlet,
            command.code()
        )
    }

    /// URL for the all-outlets status request
    pub fn status_url(&self) -> String {
        format!(
            "{}/control.cgi?outlet={}&command=\"wattbox_info.xml\"",
            self.0, STATUS_SENTINEL_OUTLET
        )
    }

    /// URL for the device info document
    pub fn info_url(&self) -> String {
        format!("{}/wattbox_info.xml", self.0)
    }
}

impl fmt::Display for NetworkPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
