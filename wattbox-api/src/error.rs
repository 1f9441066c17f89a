use http_client::TransportError;
use thiserror::Error;
use wattbox_parser::ParseError;

/// Message reported for both refused connections and 400/401 answers
const CONNECTION_REFUSED_MESSAGE: &str =
    "Error: Connection refused. Please check your network connection.";

/// High-level API errors for WattBox operations
///
/// Transport failures are classified into the categories users act on:
/// a dropped connection means bad credentials, a refused connection means
/// the device is unreachable. Anything else is passed through.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The device dropped the connection during the exchange.
    ///
    /// WattBox firmware hangs up on requests with wrong credentials instead
    /// of answering with 401.
    #[error("Error: Authentication failed. Please check your credentials.")]
    AuthenticationFailed,

    /// The device actively refused the connection
    #[error("{}", CONNECTION_REFUSED_MESSAGE)]
    ConnectionRefused,

    /// The device answered 400 or 401.
    ///
    /// Reported with the connection-refused message for compatibility with
    /// existing integrations, even though a 401 is an authentication issue.
    /// The status code is kept so callers can tell the cases apart.
    #[error("{}", CONNECTION_REFUSED_MESSAGE)]
    RequestRejected(u16),

    /// Any other HTTP error status
    #[error("HTTP error status: {0}")]
    HttpStatus(u16),

    /// Unclassified transport failure
    #[error(transparent)]
    Http(reqwest::Error),

    /// The response body was rejected by the XML parser
    #[error("Decode error: {0}")]
    Decode(#[from] ParseError),

    /// The network path does not yield a usable `Host` header
    #[error("Invalid device address: {0}")]
    InvalidAddress(String),

    /// Invalid parameter value
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Status polling was started outside a tokio runtime
    #[error("Status polling requires a running tokio runtime")]
    NoRuntime,
}

impl ApiError {
    /// Whether the error is reported with the connection-refused message
    pub fn is_connection_refused(&self) -> bool {
        matches!(self, ApiError::ConnectionRefused | ApiError::RequestRejected(_))
    }
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

/// Convert from TransportError to ApiError
impl From<TransportError> for ApiError {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::HangUp => ApiError::AuthenticationFailed,
            TransportError::Refused => ApiError::ConnectionRefused,
            TransportError::Status(code @ (400 | 401)) => ApiError::RequestRejected(code),
            TransportError::Status(code) => ApiError::HttpStatus(code),
            TransportError::InvalidHeader(name) => {
                ApiError::InvalidAddress(format!("cannot encode '{}' header", name))
            }
            TransportError::Build(e) | TransportError::Other(e) => ApiError::Http(e),
        }
    }
}
