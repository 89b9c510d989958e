//! Error types for suimei-llm

use thiserror::Error;

/// Enrichment error type
#[derive(Debug, Error)]
pub enum Error {
    /// API key missing
    #[error("provider not configured: {0}")]
    NotConfigured(String),

    /// API error
    #[error("api error: {0}")]
    Api(String),

    /// Rate limit exceeded
    #[error("rate limit exceeded")]
    RateLimit,

    /// Invalid or unparseable response
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Network error
    #[error("network error: {0}")]
    Network(String),

    /// Timeout
    #[error("timeout after {0}ms")]
    Timeout(u64),
}

impl Error {
    /// Whether a retry could plausibly succeed.
    ///
    /// Only transient conditions qualify; configuration and parse failures
    /// fail the same way every time.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimit | Self::Network(_) | Self::Timeout(_))
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_errors_are_retryable() {
        assert!(Error::RateLimit.is_retryable());
        assert!(Error::Network("reset".to_string()).is_retryable());
        assert!(Error::Timeout(30_000).is_retryable());
    }

    #[test]
    fn test_permanent_errors_are_not_retryable() {
        assert!(!Error::NotConfigured("no key".to_string()).is_retryable());
        assert!(!Error::Api("bad request".to_string()).is_retryable());
        assert!(!Error::InvalidResponse("not json".to_string()).is_retryable());
    }
}
