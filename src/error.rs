//! Error types for the login flow

/// Errors from authorization-code exchange and profile retrieval.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request never produced an HTTP response (DNS, TLS, connect,
    /// timeout).
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The provider answered with anything other than 200.
    #[error("provider returned {status}: {body}")]
    Provider {
        /// HTTP status code as sent by the provider
        status: u16,
        /// Raw response body, or `<no body>` when it could not be read
        body: String,
    },

    /// A 200 response whose body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Result alias for login operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_includes_context() {
        let http = Error::Http("connection refused".into());
        assert_eq!(http.to_string(), "HTTP request failed: connection refused");

        let provider = Error::Provider {
            status: 400,
            body: r#"{"error":"invalid_grant"}"#.into(),
        };
        assert_eq!(
            provider.to_string(),
            r#"provider returned 400: {"error":"invalid_grant"}"#
        );
    }

    #[test]
    fn error_debug_includes_variant() {
        let err = Error::Decode("missing field `access_token`".into());
        let debug = format!("{:?}", err);
        assert!(
            debug.contains("Decode"),
            "Debug should include variant name, got: {debug}"
        );
    }
}
