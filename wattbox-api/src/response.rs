//! Successful operation results

use http_client::RawResponse;

/// Result of a successful request.
///
/// Almost always a decoded record. When the body could not be handed to the
/// XML parser at all (it was not text), the untouched response is returned
/// instead of an error.
#[derive(Debug, Clone)]
pub enum Response<T> {
    /// Decoded record
    Record(T),
    /// Undecodable body, returned as received
    Raw(RawResponse),
}

impl<T> Response<T> {
    /// Borrow the decoded record, if any
    pub fn record(&self) -> Option<&T> {
        match self {
            Response::Record(record) => Some(record),
            Response::Raw(_) => None,
        }
    }

    /// Take the decoded record, if any
    pub fn into_record(self) -> Option<T> {
        match self {
            Response::Record(record) => Some(record),
            Response::Raw(_) => None,
        }
    }

    /// Whether the body could not be decoded
    pub fn is_raw(&self) -> bool {
        matches!(self, Response::Raw(_))
    }
}
