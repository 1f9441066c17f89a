//! Basic-auth token derivation

use std::fmt;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// `Authorization` header value derived from the device credentials.
///
/// Built once when the client is constructed; the plaintext credentials are
/// not kept. `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Derive `Basic base64(username:password)`
    pub fn new(username: &str, password: &str) -> Self {
        let credentials = format!("{}:{}", username, password);
        Self(format!("Basic {}", BASE64.encode(credentials)))
    }

    /// The full header value, scheme included
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(Basic ***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_token() {
        let token = AuthToken::new("technician", "technician22");
        assert_eq!(token.as_str(), "Basic dGVjaG5pY2lhbjp0ZWNobmljaWFuMjI=");
    }

    #[test]
    fn test_debug_is_redacted() {
        let token = AuthToken::new("tech", "pw1");
        let debug = format!("{:?}", token);
        assert!(!debug.contains("dGVjaDpwdzE="));
    }

    #[test]
    fn test_empty_credentials() {
        // base64(":")
        assert_eq!(AuthToken::new("", "").as_str(), "Basic Og==");
    }
}
