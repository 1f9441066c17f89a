//! Decoding of raw WattBox response bodies.
//!
//! Every WattBox XML response is wrapped in a single `<request>` root
//! element. Decoding has three outcomes:
//!
//! - the body is a well-formed `<request>` document → [`Decoded::Record`]
//! - the body cannot be handed to the XML parser at all (it is not text) →
//!   [`Decoded::RawFallback`] carrying the untouched bytes
//! - the XML parser rejects the document → [`Decoded::Failed`]

use quick_xml::events::Event;
use quick_xml::Reader;
use serde::de::DeserializeOwned;

use crate::error::{ParseError, ParseResult};

/// Name of the root element of every WattBox response
pub const ROOT_ELEMENT: &str = "request";

/// Outcome of decoding a response body
#[derive(Debug)]
pub enum Decoded<T> {
    /// The body decoded into the requested record
    Record(T),
    /// The body was not text; the raw bytes are handed back unchanged
    RawFallback(Vec<u8>),
    /// The XML parser rejected the body
    Failed(ParseError),
}

impl<T> Decoded<T> {
    /// Returns the decoded record, if any
    pub fn record(self) -> Option<T> {
        match self {
            Decoded::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Whether decoding fell back to the raw body
    pub fn is_raw_fallback(&self) -> bool {
        matches!(self, Decoded::RawFallback(_))
    }
}

/// Decode a response body into `T`.
///
/// A non-UTF-8 body is handed back unchanged in [`Decoded::RawFallback`].
pub fn decode<T: DeserializeOwned>(body: Vec<u8>) -> Decoded<T> {
    let text = match String::from_utf8(body) {
        Ok(text) => text,
        Err(e) => return Decoded::RawFallback(e.into_bytes()),
    };

    match parse_request(&text) {
        Ok(record) => Decoded::Record(record),
        Err(e) => Decoded::Failed(e),
    }
}

/// Parse an XML document whose root must be `<request>` into `T`.
pub fn parse_request<T: DeserializeOwned>(xml: &str) -> ParseResult<T> {
    let root = root_element(xml)?;
    if root != ROOT_ELEMENT {
        return Err(ParseError::UnexpectedRoot {
            expected: ROOT_ELEMENT,
            found: root,
        });
    }

    quick_xml::de::from_str(xml).map_err(|e| ParseError::XmlDeserializationFailed(e.to_string()))
}

/// Find the local name of the document's root element.
fn root_element(xml: &str) -> ParseResult<String> {
    let mut reader = Reader::from_str(xml);

    loop {
        match reader.read_event() {
            Ok(Event::Start(element)) | Ok(Event::Empty(element)) => {
                return Ok(String::from_utf8_lossy(element.local_name().as_ref()).into_owned());
            }
            Ok(Event::Eof) => {
                return Err(ParseError::MissingRequiredElement(ROOT_ELEMENT.to_string()));
            }
            Ok(_) => continue,
            Err(e) => return Err(ParseError::InvalidXmlStructure(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Sample {
        host_name: Option<String>,
    }

    #[test]
    fn test_decode_record() {
        let body = b"<?xml version=\"1.0\"?><request><host_name>Rack A</host_name></request>".to_vec();
        let sample = decode::<Sample>(body).record().unwrap();
        assert_eq!(sample.host_name.as_deref(), Some("Rack A"));
    }

    #[test]
    fn test_non_text_body_falls_back_to_raw() {
        let body = vec![0xff, 0xfe, 0x3c, 0x00];
        match decode::<Sample>(body.clone()) {
            Decoded::RawFallback(raw) => assert_eq!(raw, body),
            other => panic!("Expected RawFallback, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_body_fails() {
        let result = decode::<Sample>(Vec::new());
        assert!(matches!(
            result,
            Decoded::Failed(ParseError::MissingRequiredElement(_))
        ));
    }

    #[test]
    fn test_plain_text_body_fails() {
        let result = decode::<Sample>(b"Unauthorized".to_vec());
        assert!(matches!(result, Decoded::Failed(_)));
        assert!(!result.is_raw_fallback());
    }

    #[test]
    fn test_wrong_root_fails() {
        let result = parse_request::<Sample>("<response><host_name>x</host_name></response>");
        match result {
            Err(ParseError::UnexpectedRoot { expected, found }) => {
                assert_eq!(expected, "request");
                assert_eq!(found, "response");
            }
            other => panic!("Expected UnexpectedRoot, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_request_element() {
        let sample: Sample = parse_request("<request/>").unwrap();
        assert!(sample.host_name.is_none());
    }
}
