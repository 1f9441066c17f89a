//! Error types for the HTTP client

use std::error::Error as StdError;
use std::io;

use thiserror::Error;

/// Errors that can occur while talking to the device
#[derive(Debug, Error)]
pub enum TransportError {
    /// The device closed the connection before answering ("socket hang up").
    ///
    /// WattBox firmware drops the connection instead of answering when the
    /// credentials are wrong, so the API layer reports this as an
    /// authentication problem.
    #[error("socket hang up")]
    HangUp,

    /// The device actively refused the TCP connection
    #[error("connection refused")]
    Refused,

    /// The device answered with a non-success HTTP status
    #[error("HTTP error status: {0}")]
    Status(u16),

    /// A header value could not be encoded
    #[error("Invalid value for header '{0}'")]
    InvalidHeader(&'static str),

    /// The underlying reqwest client could not be built
    #[error("Failed to build HTTP client: {0}")]
    Build(reqwest::Error),

    /// Any other transport failure, passed through untouched
    #[error(transparent)]
    Other(reqwest::Error),
}

/// Low-level failure cause found in an error's source chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Cause {
    HangUp,
    Refused,
}

impl TransportError {
    /// Classify a reqwest error into one of the transport failure kinds
    pub fn classify(error: reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            return Self::Status(status.as_u16());
        }

        match find_cause(&error) {
            Some(Cause::HangUp) => Self::HangUp,
            Some(Cause::Refused) => Self::Refused,
            None => Self::Other(error),
        }
    }
}

/// Walk the source chain looking for a refused or dropped connection.
pub(crate) fn find_cause(error: &(dyn StdError + 'static)) -> Option<Cause> {
    let mut current: Option<&(dyn StdError + 'static)> = Some(error);

    while let Some(err) = current {
        if let Some(io_err) = err.downcast_ref::<io::Error>() {
            match io_err.kind() {
                io::ErrorKind::ConnectionRefused => return Some(Cause::Refused),
                io::ErrorKind::ConnectionReset
                | io::ErrorKind::ConnectionAborted
                | io::ErrorKind::BrokenPipe
                | io::ErrorKind::UnexpectedEof => return Some(Cause::HangUp),
                _ => {}
            }
        }

        // hyper reports a peer that closed mid-exchange without an io cause
        if err
            .to_string()
            .contains("connection closed before message completed")
        {
            return Some(Cause::HangUp);
        }

        current = err.source();
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Wrapper(io::Error);

    impl fmt::Display for Wrapper {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "tcp connect error")
        }
    }

    impl StdError for Wrapper {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.0)
        }
    }

    #[derive(Debug)]
    struct Incomplete;

    impl fmt::Display for Incomplete {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "connection closed before message completed")
        }
    }

    impl StdError for Incomplete {}

    #[test]
    fn test_refused_found_in_source_chain() {
        let err = Wrapper(io::Error::new(io::ErrorKind::ConnectionRefused, "refused"));
        assert_eq!(find_cause(&err), Some(Cause::Refused));
    }

    #[test]
    fn test_reset_is_hang_up() {
        let err = Wrapper(io::Error::new(io::ErrorKind::ConnectionReset, "reset"));
        assert_eq!(find_cause(&err), Some(Cause::HangUp));
    }

    #[test]
    fn test_incomplete_message_is_hang_up() {
        assert_eq!(find_cause(&Incomplete), Some(Cause::HangUp));
    }

    #[test]
    fn test_unrelated_io_error_is_unclassified() {
        let err = Wrapper(io::Error::new(io::ErrorKind::PermissionDenied, "nope"));
        assert_eq!(find_cause(&err), None);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(TransportError::HangUp.to_string(), "socket hang up");
        assert_eq!(TransportError::Status(404).to_string(), "HTTP error status: 404");
    }
}
